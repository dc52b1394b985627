//! Game state machine and per-frame simulation.

use std::collections::HashSet;

use glam::{Vec2, Vec3};
use rand::Rng;

use backend::system::{IoEvents, MouseButtonId};
use backend::Keycode;

use crate::collision::collides;
use crate::consts::*;
use crate::enemies::EnemyPool;
use crate::menu::{flip_cursor_y, menu_buttons, Button};
use crate::sprite::Sprite;

/// Which update/render branch runs this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    GameOver,
}

/// Everything the simulation mutates, owned by the main loop and threaded
/// through update and render.
pub struct Game {
    pub mode: GameMode,
    pub player: Sprite,
    pub background: Sprite,
    pub enemies: EnemyPool,
    pub buttons: [Button; 2],
    pub held_keys: HashSet<Keycode>,
    pub game_over_timer: f32,
    pub exit_requested: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            player: Sprite::new(PLAYER_START, SPRITE_SIZE, PLAYER_STEP),
            background: Sprite::new(
                Vec3::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0, 0.0),
                Vec3::new(WIDTH as f32, HEIGHT as f32, 1.0),
                0.0,
            ),
            enemies: EnemyPool::new(MAX_ENEMIES),
            buttons: menu_buttons(),
            held_keys: HashSet::new(),
            game_over_timer: 0.0,
            exit_requested: false,
        }
    }

    /// Applies one frame's worth of window events.
    pub fn handle_events(&mut self, events: &[IoEvents]) {
        for event in events {
            match event {
                IoEvents::KeyDown(key) => self.key_down(*key),
                IoEvents::KeyUp(key) => {
                    self.held_keys.remove(key);
                }
                IoEvents::MouseButtonDown(MouseButtonId::Left(x, y)) => {
                    self.click(flip_cursor_y(*x, *y));
                }
                _ => {}
            }
        }
    }

    fn key_down(&mut self, key: Keycode) {
        self.held_keys.insert(key);
        match key {
            // Escape backs out of play; anywhere else it quits
            Keycode::Escape => {
                if self.mode == GameMode::Playing {
                    self.reset();
                } else {
                    self.exit_requested = true;
                }
            }
            Keycode::Return if self.mode == GameMode::Menu => self.start_game(),
            _ => {}
        }
    }

    /// Left click, cursor already flipped into render coordinates.
    fn click(&mut self, cursor: Vec2) {
        if self.mode != GameMode::Menu {
            return;
        }
        if self.buttons[0].contains(cursor) {
            self.start_game();
        } else if self.buttons[1].contains(cursor) {
            self.exit_requested = true;
        }
    }

    /// Shared entry into the Playing state from the Start button or Enter.
    pub fn start_game(&mut self) {
        self.mode = GameMode::Playing;
        self.player.pos = PLAYER_START;
        self.enemies.reset();
        self.game_over_timer = 0.0;
    }

    /// Returns to the menu: parks every enemy, re-centers the player, and
    /// zeroes the timers. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.mode = GameMode::Menu;
        self.player.pos = PLAYER_START;
        self.enemies.reset();
        self.game_over_timer = 0.0;
    }

    /// One simulation step for the current mode.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        match self.mode {
            GameMode::Menu => {}
            GameMode::Playing => {
                self.move_player();
                self.player.advance_animation(dt);
                self.enemies.update(dt, rng);
                self.check_collisions();
            }
            GameMode::GameOver => {
                self.game_over_timer += dt;
                if self.game_over_timer >= GAME_OVER_DELAY {
                    self.reset();
                }
            }
        }
    }

    /// Fixed per-key step, clamped so the sprite stays fully on screen.
    fn move_player(&mut self) {
        let step = self.player.speed;

        if self.key_held(Keycode::Up) || self.key_held(Keycode::W) {
            self.player.pos.y += step;
        }
        if self.key_held(Keycode::Down) || self.key_held(Keycode::S) {
            self.player.pos.y -= step;
        }
        if self.key_held(Keycode::Left) || self.key_held(Keycode::A) {
            self.player.pos.x -= step;
        }
        if self.key_held(Keycode::Right) || self.key_held(Keycode::D) {
            self.player.pos.x += step;
        }

        let half_w = self.player.size.x / 2.0;
        let half_h = self.player.size.y / 2.0;
        self.player.pos.x = self.player.pos.x.clamp(half_w, WIDTH as f32 - half_w);
        self.player.pos.y = self.player.pos.y.clamp(half_h, HEIGHT as f32 - half_h);
    }

    fn key_held(&self, key: Keycode) -> bool {
        self.held_keys.contains(&key)
    }

    /// First overlap wins; at most one transition per frame.
    fn check_collisions(&mut self) {
        for slot in self.enemies.iter_active() {
            if collides(&self.player, &slot.sprite) {
                self.mode = GameMode::GameOver;
                self.game_over_timer = 0.0;
                break;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn enter_starts_the_game() {
        let mut game = Game::new();
        game.handle_events(&[IoEvents::KeyDown(Keycode::Return)]);
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.player.pos, PLAYER_START);
    }

    #[test]
    fn enter_outside_the_menu_does_nothing() {
        let mut game = Game::new();
        game.start_game();
        game.mode = GameMode::GameOver;
        game.handle_events(&[IoEvents::KeyDown(Keycode::Return)]);
        assert_eq!(game.mode, GameMode::GameOver);
    }

    #[test]
    fn escape_in_menu_requests_exit() {
        let mut game = Game::new();
        game.handle_events(&[IoEvents::KeyDown(Keycode::Escape)]);
        assert!(game.exit_requested);
    }

    #[test]
    fn escape_while_playing_returns_to_menu() {
        let mut game = Game::new();
        game.start_game();
        game.handle_events(&[IoEvents::KeyDown(Keycode::Escape)]);
        assert_eq!(game.mode, GameMode::Menu);
        assert!(!game.exit_requested);
    }

    #[test]
    fn held_keys_track_key_events() {
        let mut game = Game::new();
        game.handle_events(&[IoEvents::KeyDown(Keycode::A)]);
        assert!(game.key_held(Keycode::A));
        game.handle_events(&[IoEvents::KeyUp(Keycode::A)]);
        assert!(!game.key_held(Keycode::A));
    }

    #[test]
    fn player_is_clamped_at_the_screen_edge() {
        let mut game = Game::new();
        game.start_game();
        game.held_keys.insert(Keycode::Left);
        let mut rng = StdRng::seed_from_u64(3);
        // 120 frames walk the player well past x = 50; cars spawned from
        // the top edge cannot reach it that fast
        for _ in 0..120 {
            game.update(1.0 / 60.0, &mut rng);
        }
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.player.pos.x, game.player.size.x / 2.0);
    }

    #[test]
    fn game_over_returns_to_menu_after_the_delay() {
        let mut game = Game::new();
        game.start_game();
        game.mode = GameMode::GameOver;
        let mut rng = StdRng::seed_from_u64(3);
        game.update(0.5, &mut rng);
        assert_eq!(game.mode, GameMode::GameOver);
        game.update(0.5, &mut rng);
        assert_eq!(game.mode, GameMode::Menu);
    }
}
