//! Headless enemy demo
//!
//! Runs a stage for a fixed number of frames, recording each frame's draw
//! calls, and logs where every enemy ends up. An optional first argument
//! names a `.toml` or `.ron` stage configuration.

use drillbot::prelude::*;
use drillbot_engine::config::Config;
use drillbot_engine::foundation::logging;
use drillbot_engine::render::{BlendMode, DrawList};

const FRAMES: u64 = 600;
const KILL_FRAME: u64 = 300;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => StageConfig::load_from_file(&path)?,
        None => StageConfig::default(),
    };

    let mut stage = Stage::new(&config)?;
    let mut frame = DrawList::new();
    let mut opaque_draws = 0;

    while stage.frame() < FRAMES {
        frame.clear();
        stage.tick(&mut frame);
        opaque_draws += frame.count_with(BlendMode::Opaque);

        if stage.frame() == KILL_FRAME {
            if let Some(index) = stage.kill_random() {
                log::info!("Frame {KILL_FRAME}: knocked out enemy {index}");
            }
        }
    }

    for (index, enemy) in stage.enemies().iter().enumerate() {
        let position = enemy.position();
        log::info!(
            "Enemy {index}: {:?} at ({:.2}, {:.2}, {:.2}), heading {:.1}°",
            enemy.state(),
            position.x,
            position.y,
            position.z,
            enemy.heading_degrees(),
        );
    }
    log::info!(
        "{} frames, {} of {} enemies alive, {opaque_draws} part draws",
        stage.frame(),
        stage.alive_count(),
        stage.enemies().len(),
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting drill enemy demo");

    match run() {
        Ok(()) => {
            log::info!("Demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Demo error: {e}");
            Err(e)
        }
    }
}
