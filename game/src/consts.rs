//! Game configuration constants

use glam::{Vec2, Vec3};

/// Window dimensions
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// Number of enemy texture variants
pub const NUM_CAR_TEXTURES: usize = 4;
/// Starting enemy speed (pixels per frame)
pub const ENEMY_BASE_SPEED: f32 = 2.0;
/// Enemy speed ceiling
pub const ENEMY_MAX_SPEED: f32 = 7.0;
/// Speed gained per second of playing time
pub const DIFFICULTY_RATE: f32 = 0.6;
/// Enemy pool capacity
pub const MAX_ENEMIES: usize = 1000;
/// Seconds between spawn attempts
pub const SPAWN_INTERVAL: f32 = 0.3;

/// Spawns land in [SPAWN_BAND_MIN, SPAWN_BAND_MIN + SPAWN_BAND_WIDTH)
pub const SPAWN_BAND_MIN: f32 = 100.0;
pub const SPAWN_BAND_WIDTH: f32 = 600.0;
/// Fresh spawns appear just above the top edge
pub const SPAWN_Y: f32 = HEIGHT as f32 + 50.0;
/// Enemies below this are recycled; a slot is active iff y is above it
pub const DESPAWN_Y: f32 = -50.0;
/// Parked position for inactive slots
pub const INACTIVE_POS: Vec3 = Vec3::new(-100.0, -100.0, 0.0);

/// Player start/reset position
pub const PLAYER_START: Vec3 = Vec3::new(300.0, 100.0, 0.0);
/// Player step per held key per frame (not delta-scaled)
pub const PLAYER_STEP: f32 = 3.0;
/// Player and enemy sprite dimensions
pub const SPRITE_SIZE: Vec3 = Vec3::new(100.0, 100.0, 1.0);

/// Hit boxes extend this fraction of the sprite's size from its center
pub const HITBOX_EXTENT: f32 = 0.2;

/// Seconds the game-over screen lingers before returning to the menu
pub const GAME_OVER_DELAY: f32 = 1.0;

/// Sprite animation rate (atlas frames per second)
pub const ANIM_FPS: f32 = 12.0;

/// Menu buttons
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);
pub const BUTTON_OFFSET_Y: f32 = 50.0;
pub const START_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const START_HOVER_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.5);
pub const QUIT_COLOR: Vec3 = Vec3::new(0.5, 0.0, 0.5);
pub const QUIT_HOVER_COLOR: Vec3 = Vec3::new(0.8, 0.5, 0.8);

/// Asset paths, relative to the working directory
pub const BACKGROUND_TEXTURE: &str = "assets/tex/background.png";
pub const PLAYER_TEXTURE: &str = "assets/sprites/player.png";
pub const CAR_TEXTURES: [&str; NUM_CAR_TEXTURES] = [
    "assets/sprites/car1.png",
    "assets/sprites/car2.png",
    "assets/sprites/car3.png",
    "assets/sprites/car4.png",
];
