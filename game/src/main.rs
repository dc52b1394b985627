//! Road Dodge entry point: window setup and the frame loop.

use std::time::Instant;

use backend::system::System;

use road_dodge::consts::{HEIGHT, WIDTH};
use road_dodge::menu::flip_cursor_y;
use road_dodge::render::SpriteRenderer;
use road_dodge::{Game, GameMode};

fn main() {
    env_logger::init();

    let mut system = match System::new("Road Dodge", WIDTH as usize, HEIGHT as usize) {
        Ok(system) => system,
        Err(e) => {
            log::error!("window initialization failed: {e}");
            std::process::exit(1);
        }
    };
    backend::glutils::print_opengl_info();

    let renderer = match SpriteRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("renderer initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let mut game = Game::new();
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut last_frame = Instant::now();
    log::info!("Road Dodge running");

    while !game.exit_requested {
        if !system.process_io_events() {
            break;
        }
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let cursor = flip_cursor_y(system.cursor.0, system.cursor.1);
        game.handle_events(&system.events);
        game.update(dt, &mut rng);

        match game.mode {
            GameMode::Menu => system.clear_screen(0.1, 0.1, 0.1),
            _ => system.clear_screen(0.0, 0.0, 0.0),
        }
        renderer.draw(&game, cursor);
        system.draw_to_screen();

        let elapsed = start.elapsed().as_secs_f32();
        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        system.set_title(&format!("Road Dodge | {elapsed:.1}s | {fps:.0} FPS"));
    }
}
