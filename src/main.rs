//! Galehollow headless runtime.
//!
//! Runs the gameplay core without a window:
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for `config.ini`, **serde_json** for the pool table
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults on failure) and apply CLI overrides
//! 2. Build the world: resources, object pools, observers, hazards
//! 3. Advance a fixed number of frames at a fixed step:
//!    - Update world time
//!    - Apply deferred timer starts, tick timers, move projectiles
//! 4. Return every pooled entity and log a summary
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 300
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use galehollow::game;
use galehollow::resources::gameconfig::GameConfig;
use galehollow::resources::objectpool::{ObjectPool, PoolCategory};
use galehollow::resources::worldtime::WorldTime;
use galehollow::systems::time::update_world_time;
use std::path::PathBuf;

/// Galehollow gameplay runtime
#[derive(Parser)]
#[command(version, about = "Runs the Galehollow hazards and pools headless for a number of frames")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate (overrides the config file).
    #[arg(long, value_name = "N")]
    frames: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}. Using defaults", e);
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let errors = game::setup(&mut world, &config);
    if !errors.is_empty() {
        log::warn!("{} pool(s) could not be built", errors.len());
    }

    let mut update = game::build_schedule();
    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    let dt = config.fixed_delta();
    log::info!("Running {} frames at {} fps", config.frames, config.fps);
    for _ in 0..config.frames {
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    let time = *world.resource::<WorldTime>();
    {
        let pool = world.resource::<ObjectPool>();
        for category in [
            PoolCategory::TestCube,
            PoolCategory::Windball,
            PoolCategory::ShootingObject,
        ] {
            if let Some(len) = pool.len(category) {
                log::info!("Pool {}: {} objects", category, len);
            }
        }
    }
    game::despawn_all_pooled(&mut world);
    world.flush();
    log::info!(
        "Simulated {} frames, {:.2}s of game time",
        time.frame_count,
        time.elapsed
    );
}
