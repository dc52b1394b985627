//! Axis-aligned bounding-box collision between sprites.

use crate::consts::HITBOX_EXTENT;
use crate::sprite::Sprite;

/// Overlap test between the shrunk boxes of two sprites.
///
/// Each hit box spans HITBOX_EXTENT of the sprite's size on either side of
/// its center. Strict inequalities: boxes that merely touch do not collide.
pub fn collides(a: &Sprite, b: &Sprite) -> bool {
    let a_left = a.pos.x - a.size.x * HITBOX_EXTENT;
    let a_right = a.pos.x + a.size.x * HITBOX_EXTENT;
    let a_top = a.pos.y + a.size.y * HITBOX_EXTENT;
    let a_bottom = a.pos.y - a.size.y * HITBOX_EXTENT;

    let b_left = b.pos.x - b.size.x * HITBOX_EXTENT;
    let b_right = b.pos.x + b.size.x * HITBOX_EXTENT;
    let b_top = b.pos.y + b.size.y * HITBOX_EXTENT;
    let b_bottom = b.pos.y - b.size.y * HITBOX_EXTENT;

    a_right > b_left && a_left < b_right && a_top > b_bottom && a_bottom < b_top
}
