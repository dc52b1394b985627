//! Platform layer: SDL2 window and input, OpenGL shader compilation,
//! texture upload, and quad geometry. Everything that touches `gl` or
//! `sdl2` lives here; the game crate stays GL-free.

pub mod glutils;
pub mod quad;
pub mod shaders;
pub mod system;

pub use sdl2::keyboard::Keycode;
