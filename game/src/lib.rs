//! Road Dodge - steer a car through ever-faster oncoming traffic.
//!
//! Core modules:
//! - `game`: state machine and per-frame simulation
//! - `enemies`: fixed-capacity enemy pool with spawn/recycle logic
//! - `collision`: axis-aligned bounding-box tests
//! - `menu`: buttons and cursor hit-testing
//! - `sprite`: the sprite data model
//! - `render`: sprite drawing over the backend's GL plumbing
//!
//! The simulation never touches GL; everything in `game`, `enemies`,
//! `collision`, `menu`, and `sprite` runs headless in tests.

pub mod collision;
pub mod consts;
pub mod enemies;
pub mod game;
pub mod menu;
pub mod render;
pub mod sprite;

pub use game::{Game, GameMode};
