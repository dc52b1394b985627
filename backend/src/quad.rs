use crate::glutils::{check_gl_err, gl_buffer_data_arr_stat, gl_vertex_attrib_ptr_enab};
use gl::*;

/// A unit quad around the origin: two triangles with interleaved position
/// and texture-coordinate attributes. Built once and reused for every
/// sprite; the model matrix supplies per-draw translation and scale.
/// Texture coordinates span one atlas frame of size (frame_u, frame_v).
pub struct Quad {
    vao: u32,
}

impl Quad {
    pub fn new(frame_u: f32, frame_v: f32) -> Quad {
        let (ds, dt) = (frame_u, frame_v);
        #[rustfmt::skip]
        let vertices: [f32; 24] = [
            // x     y     s    t
            -0.5,  0.5, 0.0,  dt,
            -0.5, -0.5, 0.0, 0.0,
             0.5,  0.5,  ds,  dt,
            -0.5, -0.5, 0.0, 0.0,
             0.5, -0.5,  ds, 0.0,
             0.5,  0.5,  ds,  dt,
        ];

        let mut vao = 0;
        let mut vbo = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        unsafe { gl::BindVertexArray(vao) };
        unsafe { gl::GenBuffers(1, &mut vbo) };
        unsafe { gl::BindBuffer(ARRAY_BUFFER, vbo) };
        gl_buffer_data_arr_stat(&vertices);
        // attribute 0 - position, attribute 1 - texture coordinates
        gl_vertex_attrib_ptr_enab(0, 2, 4, 0);
        gl_vertex_attrib_ptr_enab(1, 2, 4, 2);
        unsafe { gl::BindBuffer(ARRAY_BUFFER, 0) };
        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        Quad { vao }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(TRIANGLES, 0, 6);
            gl::BindVertexArray(0);
        }
    }
}
