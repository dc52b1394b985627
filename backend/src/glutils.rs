use gl::{types::*, *};

pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    panic!("error: {:?}", err);
}

pub fn print_opengl_info() {
    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::info!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    unsafe { gl::GetIntegerv(MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::info!("MAX_COMBINED_TEXTURE_IMAGE_UNITS = {}", mtu);
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

pub fn enable_alpha_blending() {
    unsafe {
        gl::Enable(BLEND);
        gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
    }
}

/// GL texture name wrapper. The invalid name 0 samples as black; the game
/// uses it to keep running when a decode fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture(pub u32);

impl Texture {
    pub fn invalid() -> Texture {
        Texture(0)
    }

    pub fn bind(&self) {
        unsafe { gl::BindTexture(TEXTURE_2D, self.0) };
    }
}

/// Loads an image file into a 2D texture with repeat wrapping and
/// nearest-neighbor filtering.
pub fn load_texture(filename: &str) -> Result<Texture, String> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, REPEAT),
        (TEXTURE_2D, TEXTURE_WRAP_T, REPEAT),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
    ];
    load_texture_params(filename, &params)
}

pub fn load_texture_params(
    filename: &str,
    params: &[(GLenum, GLenum, GLenum)],
) -> Result<Texture, String> {
    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        // the quad's vertex shader flips t; loading must not flip again
        stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
    }
    let img = match stb_image::image::load(filename) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err("32-bit images not supported here".to_string());
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => {
            return Err(format!("loading image {} error: {}", filename, e))
        }
    };

    // 3-channel images upload as opaque RGB, everything else as RGBA
    let format = if img.depth == 3 { RGB } else { RGBA };

    unsafe {
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            format as i32,
            img.width as i32,
            img.height as i32,
            0,
            format,
            UNSIGNED_BYTE,
            img.data.as_ptr().cast(),
        )
    };
    check_gl_err();
    unsafe { gl::GenerateMipmap(TEXTURE_2D) };
    unsafe { gl::BindTexture(TEXTURE_2D, 0) };

    Ok(Texture(texture))
}
