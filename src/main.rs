#![allow(dead_code)]

mod components;
mod constants;
mod events;
mod game;
mod game_loop;
mod geometry;
mod level;
mod perception;
mod systems;
mod time_system;

use std::path::Path;

use constants::MAX_PANIC_LEVEL;
use events::Presenter;
use game::Game;
use hecs::Entity;
use level::LevelDef;
use rand::Rng;

/// Default layout swept by the demo shell: five trigger zones ringing the
/// player, authored out of order around the circle
const GALLERY: &str = include_str!("../demos/gallery.json");

/// Presenter that narrates presentation changes to the log.
///
/// Stands in for the engine's post-process and audio layer; a real shell
/// would drive blur materials and a heartbeat cue from the same calls.
struct LogPresenter;

impl Presenter for LogPresenter {
    fn update_blur(&mut self, level: i32) {
        log::info!("blur -> {level}");
    }
    fn update_depth_of_field(&mut self, level: i32) {
        log::info!("depth of field -> {level}");
    }
    fn play_heartbeat(&mut self, intensity: f32) {
        log::info!("heartbeat playing at {intensity}");
    }
    fn stop_heartbeat(&mut self) {
        log::info!("heartbeat stopped");
    }
    fn trigger_fired(&mut self, trigger: Entity, panic_level: i32) {
        log::info!("trigger {trigger:?} fired (panic level {panic_level})");
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let level = match std::env::args().nth(1) {
        Some(path) => LevelDef::load(Path::new(&path))?,
        None => LevelDef::from_json(GALLERY)?,
    };

    let mut game = Game::new(&level);
    let mut presenter = LogPresenter;
    let mut rng = rand::thread_rng();

    // Sweep the gaze around the room while drifting forward, up to 45
    // simulated seconds at a fixed timestep. The sweep slows as panic
    // escalates because look rate shares the movement speed divisor.
    const DT: f32 = 1.0 / 60.0;
    for _ in 0..(45 * 60) {
        game.move_forward(0.3);
        game.look_right(-1.0 + rng.gen_range(-0.2..0.2));
        game.tick(DT, &mut presenter);

        if game.panic.level() == MAX_PANIC_LEVEL && game.registry.remaining() == 0 {
            break;
        }
    }

    let pose = game
        .world
        .get::<&components::Pose>(game.player)
        .map(|p| *p)
        .map_err(|_| "player vanished during the demo".to_string())?;
    log::info!(
        "demo finished at t={:.1}s: panic level {}, {} triggers left, position ({:.0}, {:.0})",
        game.clock.time,
        game.panic.level(),
        game.registry.remaining(),
        pose.position.x,
        pose.position.y
    );

    Ok(())
}
