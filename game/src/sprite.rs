//! Sprite data model - pure data, no GPU handles.

use glam::{Vec2, Vec3};

use crate::consts::ANIM_FPS;

/// A renderable 2D entity. Position and size feed the model matrix; the
/// frame/row indices select a cell in the sprite's texture atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub pos: Vec3,
    pub size: Vec3,
    /// Movement step per frame
    pub speed: f32,
    pub frame: u32,
    pub row: u32,
    pub frame_count: u32,
    pub row_count: u32,
    anim_timer: f32,
}

impl Sprite {
    pub fn new(pos: Vec3, size: Vec3, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            frame: 0,
            row: 0,
            frame_count: 1,
            row_count: 1,
            anim_timer: 0.0,
        }
    }

    /// Atlas cell size in texture coordinates (ds, dt).
    pub fn frame_step(&self) -> Vec2 {
        Vec2::new(1.0 / self.frame_count as f32, 1.0 / self.row_count as f32)
    }

    /// Texture-coordinate offset of the current atlas cell.
    pub fn atlas_offset(&self) -> Vec2 {
        let step = self.frame_step();
        Vec2::new(self.frame as f32 * step.x, self.row as f32 * step.y)
    }

    /// Advances the current frame at ANIM_FPS, wrapping within the row.
    pub fn advance_animation(&mut self, dt: f32) {
        self.anim_timer += dt;
        let frame_time = 1.0 / ANIM_FPS;
        while self.anim_timer >= frame_time {
            self.frame = (self.frame + 1) % self.frame_count;
            self.anim_timer -= frame_time;
        }
    }
}
