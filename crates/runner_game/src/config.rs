//! Game configuration
//!
//! Loaded from TOML or RON at start-up; every field has a default so a
//! partial file is enough.

use std::path::Path;

use serde::{Deserialize, Serialize};

use runner_engine::config::{Config, ConfigError};
use runner_engine::core::config::{EngineConfig, PhysicsConfig};

use crate::obstacle::CollisionMode;

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Collision settings
    pub physics: PhysicsConfig,

    /// Loop and logging settings
    pub engine: EngineConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Track scroll speed in units per millisecond
    pub track_speed: f32,

    /// Multiplier on every obstacle's starting velocity
    pub difficulty_speed: f32,

    /// Groups whose rearmost obstacle passes this depth are recycled
    pub far_clip: f32,

    /// Depth of the first group
    pub spawn_depth: f32,

    /// Distance between consecutive groups
    pub group_spacing: f32,

    /// Number of groups kept on the track
    pub groups_in_flight: usize,

    /// Player sphere radius
    pub player_radius: f32,

    /// Box or sphere test against the player
    pub collision_mode: CollisionMode,

    /// Score for every group the player gets past
    pub points_per_group: u64,

    /// Seed for pattern selection
    pub seed: u64,

    /// Frames to simulate
    pub frames: u32,

    /// Start a new run right after a game over
    pub auto_restart: bool,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            track_speed: 0.01,
            difficulty_speed: 1.0,
            far_clip: 10.0,
            spawn_depth: -30.0,
            group_spacing: 12.0,
            groups_in_flight: 3,
            player_radius: 1.0,
            collision_mode: CollisionMode::Box,
            points_per_group: 10,
            seed: 42,
            frames: 3600,
            auto_restart: false,
        }
    }
}

impl GameplayConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("track_speed", self.track_speed),
            ("difficulty_speed", self.difficulty_speed),
            ("group_spacing", self.group_spacing),
            ("player_radius", self.player_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.far_clip.is_finite() || !self.spawn_depth.is_finite() {
            return Err(ConfigError::Invalid("far_clip and spawn_depth must be finite".to_string()));
        }
        if self.spawn_depth >= self.far_clip {
            return Err(ConfigError::Invalid(format!(
                "spawn_depth {} must lie before far_clip {}",
                self.spawn_depth, self.far_clip
            )));
        }
        if self.groups_in_flight == 0 {
            return Err(ConfigError::Invalid("groups_in_flight must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl GameConfig {
    /// Load from `path` when given and present, otherwise defaults
    ///
    /// Returns whether the file was actually read, so the caller can report
    /// the fallback once logging is up.
    pub fn load(path: Option<&Path>) -> Result<(Self, bool), ConfigError> {
        match path {
            Some(path) => Ok((Self::load_or_default(path)?, path.exists())),
            None => Ok((Self::default(), false)),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gameplay.validate()?;
        self.physics.validate()?;
        self.engine.validate()
    }
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use runner_engine::physics::TransformConvention;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            [gameplay]
            seed = 7
            collision_mode = "Sphere"

            [physics.collision]
            convention = "GeneralInverse"
            "#,
        )
        .unwrap();

        assert_eq!(config.gameplay.seed, 7);
        assert_eq!(config.gameplay.collision_mode, CollisionMode::Sphere);
        assert_eq!(config.gameplay.groups_in_flight, 3);
        assert_eq!(config.physics.collision.convention, TransformConvention::GeneralInverse);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = GameConfig::default();
        config.gameplay.auto_restart = true;
        config.gameplay.frames = 10;
        let text = config.to_ron_string().unwrap();
        assert_eq!(GameConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.player_radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.gameplay.spawn_depth = 20.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.gameplay.groups_in_flight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reads_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runner.toml");

        let mut saved = GameConfig::default();
        saved.gameplay.seed = 99;
        saved.gameplay.collision_mode = CollisionMode::Sphere;
        saved.save_to_file(&path).unwrap();

        let (config, loaded) = GameConfig::load(Some(&path)).unwrap();
        assert!(loaded);
        assert_eq!(config, saved);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (config, loaded) = GameConfig::load(Some(Path::new("no/such/runner.toml"))).unwrap();
        assert!(!loaded);
        assert_eq!(config, GameConfig::default());

        let (_, loaded) = GameConfig::load(None).unwrap();
        assert!(!loaded);
    }
}
