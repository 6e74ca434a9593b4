//! # Core Engine Module
//!
//! Shared configuration for the subsystems built on top of the foundation
//! layer.
//!
//! ## Organization
//!
//! - **Config**: engine loop, logging and physics settings

pub mod config;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    PhysicsConfig,
    Config,
    ConfigError,
};
