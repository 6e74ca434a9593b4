//! Headless frame driver

use runner_engine::foundation::math::Vec3;
use runner_engine::foundation::time::FrameTimer;
use runner_engine::physics::CollisionError;

use crate::components::Player;
use crate::config::GameConfig;
use crate::state::{GameState, Session};
use crate::track::Track;

/// Game-level errors
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] runner_engine::config::ConfigError),

    /// Scene geometry could not be built
    #[error("Collision setup error: {0}")]
    Collision(#[from] CollisionError),

    /// Bad command line
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Summary of a finished simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: u64,
    /// Runs started
    pub runs: u32,
    /// Score of the last run
    pub score: u64,
    /// Best score over every run
    pub best_score: u64,
    /// State after the last frame
    pub state: GameState,
}

/// Player, track and session driven by a fixed-step clock
pub struct Runner {
    config: GameConfig,
    player: Player,
    track: Track,
    session: Session,
    timer: FrameTimer,
}

impl Runner {
    /// Build the scene from a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let player = Player::new(Vec3::zeros(), config.gameplay.player_radius)?;
        let track = Track::new(&config.gameplay)?;
        let session = Session::new(config.gameplay.points_per_group);

        log::info!(
            "Runner ready: {} groups, {:?} collisions, {:?} frame convention",
            track.len(),
            config.gameplay.collision_mode,
            config.physics.collision.convention
        );

        Ok(Self {
            config,
            player,
            track,
            session,
            timer: FrameTimer::new(),
        })
    }

    /// Simulate one fixed step
    pub fn step(&mut self) -> GameState {
        let delta_time = self.timer.tick_fixed(self.config.engine.fixed_timestep_ms);

        if self.session.state() == GameState::GameOver {
            if !self.config.gameplay.auto_restart {
                return GameState::GameOver;
            }
            self.track.reset();
            self.session.restart();
        }

        let outcome = self.track.frame(delta_time, &self.player, &self.config.physics.collision);
        self.session.frame(outcome.hit, outcome.recycled)
    }

    /// Simulate `frames` steps, stopping early on game over without auto restart
    pub fn run(&mut self, frames: u32) -> RunSummary {
        for _ in 0..frames {
            if self.step() == GameState::GameOver && !self.config.gameplay.auto_restart {
                break;
            }
        }
        self.summary()
    }

    /// Current totals
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.timer.frame_count(),
            runs: self.session.runs(),
            score: self.session.score(),
            best_score: self.session.best_score(),
            state: self.session.state(),
        }
    }

    /// The session being played
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::CollisionMode;

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.track_speed = -1.0;
        assert!(matches!(Runner::new(config), Err(GameError::Config(_))));
    }

    #[test]
    fn test_huge_player_is_hit_on_first_frame() {
        let mut config = GameConfig::default();
        config.gameplay.player_radius = 100.0;
        let mut runner = Runner::new(config).unwrap();

        let summary = runner.run(50);
        assert_eq!(summary.state, GameState::GameOver);
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn test_auto_restart_keeps_running() {
        let mut config = GameConfig::default();
        config.gameplay.player_radius = 100.0;
        config.gameplay.auto_restart = true;
        config.gameplay.collision_mode = CollisionMode::Sphere;
        let mut runner = Runner::new(config).unwrap();

        let summary = runner.run(10);
        assert_eq!(summary.frames, 10);
        assert!(summary.runs > 1);
        assert_eq!(runner.session().runs(), summary.runs);
        assert_eq!(runner.session().best_score(), summary.best_score);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let config = GameConfig::default();
        let a = Runner::new(config.clone()).unwrap().run(600);
        let b = Runner::new(config).unwrap().run(600);
        assert_eq!(a, b);
    }
}
