//! # Engine Configuration
//!
//! Settings shared by every runner built on the engine: logging, the fixed
//! simulation step and collision tunables. Both structs load from TOML or RON
//! through [`Config`].

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::physics::CollisionSettings;

/// # Engine Configuration
///
/// Core loop behaviour and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Simulation step in milliseconds
    pub fixed_timestep_ms: f32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            fixed_timestep_ms: 1000.0 / 60.0,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the fixed simulation step
    pub fn with_fixed_timestep_ms(mut self, step_ms: f32) -> Self {
        self.fixed_timestep_ms = step_ms;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_timestep_ms.is_finite() || self.fixed_timestep_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fixed_timestep_ms must be positive, got {}",
                self.fixed_timestep_ms
            )));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

/// # Physics Configuration
///
/// Collision tunables handed to every overlap and proximity query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Epsilon, frame convention and non-rigid warning
    pub collision: CollisionSettings,
}

impl PhysicsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let epsilon = self.collision.epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "collision epsilon must be finite and non-negative, got {epsilon}"
            )));
        }
        Ok(())
    }
}

impl Config for PhysicsConfig {}
