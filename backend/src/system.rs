use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::video::{GLProfile, SwapInterval};

pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

pub enum IoEvents {
    KeyDown(Keycode),
    KeyUp(Keycode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
    MouseButtonDown(MouseButtonId),
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    pub events: Vec<IoEvents>,
    /// Cursor position in window coordinates (origin top-left, y down).
    pub cursor: (i32, i32),
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_multisample_buffers(1);
        gl_attr.set_multisample_samples(8);

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .opengl()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building OpenGL window: {e}")),
        };

        let gl_ctx = window.gl_create_context()?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
        if !gl::ClearColor::is_loaded() {
            return Err("failed to load OpenGL functions".to_string());
        }

        if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
            log::warn!("vsync not available: {e}");
        }

        let (fb_w, fb_h) = window.drawable_size();
        unsafe { gl::Viewport(0, 0, fb_w as i32, fb_h as i32) };

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            window,
            gl_ctx,
            events: Vec::new(),
            cursor: (0, 0),
        })
    }

    /// Drains pending window events into `events` and snapshots the cursor
    /// position. Returns false when the window manager asked us to close.
    /// Keys are not interpreted here; what Escape means depends on the
    /// game state.
    pub fn process_io_events(&mut self) -> bool {
        self.events.clear();
        let mut event_pump = self.sdl_context.event_pump().unwrap();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return false,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => self.events.push(IoEvents::KeyDown(key)),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => self.events.push(IoEvents::KeyUp(key)),
                Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => self.events.push(IoEvents::MouseMotion(x, y, xrel, yrel)),
                Event::MouseButtonDown { mouse_btn, x, y, .. } => self
                    .events
                    .push(IoEvents::MouseButtonDown(mouse_button_id(mouse_btn, x, y))),
                Event::MouseButtonUp { mouse_btn, x, y, .. } => self
                    .events
                    .push(IoEvents::MouseButtonUp(mouse_button_id(mouse_btn, x, y))),
                _ => {}
            }
        }

        let mouse = event_pump.mouse_state();
        self.cursor = (mouse.x(), mouse.y());

        true
    }

    pub fn set_title(&mut self, title: &str) {
        let _ = self.window.set_title(title);
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
    }
}

fn mouse_button_id(btn: MouseButton, x: i32, y: i32) -> MouseButtonId {
    match btn {
        MouseButton::Left => MouseButtonId::Left(x, y),
        MouseButton::Right => MouseButtonId::Right(x, y),
        MouseButton::Middle => MouseButtonId::Middle(x, y),
        _ => MouseButtonId::Other(x, y),
    }
}
