//! Headless end-to-end scenarios driving the Game context.

use backend::system::{IoEvents, MouseButtonId};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use road_dodge::consts::*;
use road_dodge::{Game, GameMode};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xD0D6E)
}

#[test]
fn clicking_start_enters_playing_and_repositions_the_player() {
    let mut game = Game::new();
    // Start button center is (400, 350) in render coordinates; the window
    // reports the cursor with y inverted.
    let window_y = HEIGHT as i32 - 350;
    game.handle_events(&[IoEvents::MouseButtonDown(MouseButtonId::Left(
        400, window_y,
    ))]);
    assert_eq!(game.mode, GameMode::Playing);
    assert_eq!(game.player.pos, Vec3::new(300.0, 100.0, 0.0));
}

#[test]
fn clicking_quit_requests_exit() {
    let mut game = Game::new();
    let window_y = HEIGHT as i32 - 250;
    game.handle_events(&[IoEvents::MouseButtonDown(MouseButtonId::Left(
        400, window_y,
    ))]);
    assert_eq!(game.mode, GameMode::Menu);
    assert!(game.exit_requested);
}

#[test]
fn clicks_outside_both_buttons_do_nothing() {
    let mut game = Game::new();
    game.handle_events(&[IoEvents::MouseButtonDown(MouseButtonId::Left(10, 10))]);
    assert_eq!(game.mode, GameMode::Menu);
    assert!(!game.exit_requested);
}

#[test]
fn clicks_are_ignored_while_playing() {
    let mut game = Game::new();
    game.start_game();
    let window_y = HEIGHT as i32 - 250;
    game.handle_events(&[IoEvents::MouseButtonDown(MouseButtonId::Left(
        400, window_y,
    ))]);
    assert_eq!(game.mode, GameMode::Playing);
    assert!(!game.exit_requested);
}

#[test]
fn an_overlapping_enemy_ends_the_run_in_one_tick() {
    let mut game = Game::new();
    game.start_game();
    let slot = &mut game.enemies.slots[0];
    slot.active = true;
    slot.sprite.pos = game.player.pos + Vec3::new(10.0, 10.0, 0.0);
    slot.sprite.speed = 0.0;
    game.update(1.0 / 60.0, &mut rng());
    assert_eq!(game.mode, GameMode::GameOver);
}

#[test]
fn a_distant_enemy_does_not_end_the_run() {
    let mut game = Game::new();
    game.start_game();
    let slot = &mut game.enemies.slots[0];
    slot.active = true;
    slot.sprite.pos = Vec3::new(700.0, 500.0, 0.0);
    slot.sprite.speed = 0.0;
    game.update(1.0 / 60.0, &mut rng());
    assert_eq!(game.mode, GameMode::Playing);
}

#[test]
fn reset_is_idempotent() {
    let mut game = Game::new();
    game.start_game();
    let mut r = rng();
    for _ in 0..120 {
        game.update(1.0 / 60.0, &mut r);
    }
    game.reset();
    let player_after_one = game.player.pos;
    let enemies_after_one = game.enemies.clone();
    let mode_after_one = game.mode;

    game.reset();
    assert_eq!(game.mode, mode_after_one);
    assert_eq!(game.player.pos, player_after_one);
    assert_eq!(game.enemies, enemies_after_one);
    assert!(game.enemies.slots.iter().all(|s| !s.active));
    assert_eq!(game.enemies.play_time, 0.0);
    assert_eq!(game.enemies.spawn_timer, 0.0);
    assert_eq!(game.game_over_timer, 0.0);
}

#[test]
fn game_over_flows_back_to_the_menu_after_one_second() {
    let mut game = Game::new();
    game.start_game();
    let slot = &mut game.enemies.slots[0];
    slot.active = true;
    slot.sprite.pos = game.player.pos;
    slot.sprite.speed = 0.0;
    let mut r = rng();
    game.update(1.0 / 60.0, &mut r);
    assert_eq!(game.mode, GameMode::GameOver);

    // linger just under the delay, then cross it
    game.update(0.75, &mut r);
    assert_eq!(game.mode, GameMode::GameOver);
    game.update(0.75, &mut r);
    assert_eq!(game.mode, GameMode::Menu);
    assert!(game.enemies.slots.iter().all(|s| !s.active));
    assert_eq!(game.player.pos, PLAYER_START);
}

#[test]
fn difficulty_clock_restarts_with_each_run() {
    let mut game = Game::new();
    let mut r = rng();
    game.start_game();
    for _ in 0..300 {
        game.update(1.0 / 60.0, &mut r);
        if game.mode != GameMode::Playing {
            break;
        }
    }
    game.reset();
    game.start_game();
    assert_eq!(game.enemies.play_time, 0.0);
}
