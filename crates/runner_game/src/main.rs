//! Obstacle runner
//!
//! Headless simulation of the runner: obstacle groups scroll towards a ball
//! and the run ends on the first collision.
//!
//! Usage: `runner [config.toml|config.ron] [frames]`

use std::path::PathBuf;

use runner_engine::foundation::logging;
use runner_game::config::GameConfig;
use runner_game::game::{GameError, Runner};

fn main() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let frames = args
        .next()
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|e| GameError::Usage(format!("frame count '{raw}': {e}")))
        })
        .transpose()?;

    let (config, loaded) = GameConfig::load(config_path.as_deref())?;
    logging::init_with_level(&config.engine.log_level);

    match (&config_path, loaded) {
        (Some(path), true) => log::info!("Loaded configuration from {}", path.display()),
        (Some(path), false) => log::warn!("Config file {} not found, using defaults", path.display()),
        (None, _) => log::info!("No configuration file given, using defaults"),
    }

    let frames = frames.unwrap_or(config.gameplay.frames);
    let mut runner = Runner::new(config)?;
    let summary = runner.run(frames);

    log::info!(
        "Finished after {} frames: {} run(s), score {}, best {}, {:?}",
        summary.frames,
        summary.runs,
        summary.score,
        summary.best_score,
        summary.state
    );
    Ok(())
}
