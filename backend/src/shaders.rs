use crate::glutils::check_gl_err;
use gl::types::*;
use gl::*;
use glam::Mat4;
use std::ffi::CString;

#[derive(Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    /// Compiles and links a program from vertex and fragment source text.
    /// Compile and link failures carry the GL info log in the error.
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, String> {
        let vertex_shader = Self::compile(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = Self::compile(FRAGMENT_SHADER, "fragment", fragment_code)?;

        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            return Err(format!(
                "program link error: {}",
                program_info_log(shader_program)
            ));
        }

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn compile(kind: GLenum, stage: &str, shader_code: &str) -> Result<u32, String> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(format!("gl::CreateShader({stage}) failed"));
        }

        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &(shader_code.len().try_into().unwrap()),
            );
        }
        unsafe { gl::CompileShader(shader_id) };

        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.try_into().unwrap());
            }
            return Err(format!(
                "{stage} shader compilation error: {}",
                String::from_utf8_lossy(&v)
            ));
        }

        Ok(shader_id)
    }

    fn get_uniform_location(&self, name: &str) -> i32 {
        let c_name = CString::new(name).unwrap_or_else(|_| {
            panic!("get_uniform_location: CString::new failed for '{}'", name);
        });

        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err();
        if location == -1 {
            panic!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id, name
            );
        }
        location
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err();
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        unsafe { gl::Uniform1i(self.get_uniform_location(name), i32::from(value)) };
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        unsafe { gl::Uniform1i(self.get_uniform_location(name), value) };
    }

    pub fn set_vec2(&self, name: &str, v0: f32, v1: f32) {
        unsafe { gl::Uniform2f(self.get_uniform_location(name), v0, v1) };
    }

    pub fn set_vec3(&self, name: &str, v0: f32, v1: f32, v2: f32) {
        unsafe { gl::Uniform3f(self.get_uniform_location(name), v0, v1, v2) };
    }

    pub fn set_mat4(&self, name: &str, mat: &Mat4) {
        let location = self.get_uniform_location(name);
        let arr = mat.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, FALSE, arr.as_ptr()) };
    }
}

fn program_info_log(program_id: u32) -> String {
    let mut v: Vec<u8> = Vec::with_capacity(1024);
    let mut log_len = 0_i32;
    unsafe {
        gl::GetProgramInfoLog(program_id, 1024, &mut log_len, v.as_mut_ptr().cast());
        v.set_len(log_len.try_into().unwrap());
    }
    String::from_utf8_lossy(&v).to_string()
}
