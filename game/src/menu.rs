//! Menu buttons and cursor hit-testing.

use glam::{Vec2, Vec3};

use crate::consts::*;

/// Static button description; never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub pos: Vec2,
    pub size: Vec2,
    pub label: &'static str,
    pub color: Vec3,
    pub hover_color: Vec3,
}

impl Button {
    /// True when `point` lies strictly inside the centered rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x - self.size.x / 2.0
            && point.x < self.pos.x + self.size.x / 2.0
            && point.y > self.pos.y - self.size.y / 2.0
            && point.y < self.pos.y + self.size.y / 2.0
    }

    /// Render color for the current cursor position.
    pub fn color_under(&self, cursor: Vec2) -> Vec3 {
        if self.contains(cursor) {
            self.hover_color
        } else {
            self.color
        }
    }
}

/// The two menu buttons: Start above center, Quit below.
pub fn menu_buttons() -> [Button; 2] {
    let center = Vec2::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0);
    [
        Button {
            pos: Vec2::new(center.x, center.y + BUTTON_OFFSET_Y),
            size: BUTTON_SIZE,
            label: "Start",
            color: START_COLOR,
            hover_color: START_HOVER_COLOR,
        },
        Button {
            pos: Vec2::new(center.x, center.y - BUTTON_OFFSET_Y),
            size: BUTTON_SIZE,
            label: "Quit",
            color: QUIT_COLOR,
            hover_color: QUIT_HOVER_COLOR,
        },
    ]
}

/// The window reports the cursor with y growing downward; rendering has y
/// growing upward. Flip before any hit test.
pub fn flip_cursor_y(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, HEIGHT as f32 - y as f32)
}
