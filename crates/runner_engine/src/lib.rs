//! # Runner Engine
//!
//! Geometry and motion core for an endless-runner style game.
//!
//! ## Features
//!
//! - **Bounding Volumes**: local-space boxes built once from mesh vertices
//! - **Collision Queries**: box vs. box overlap and sphere vs. box proximity
//!   under the objects' current world matrices
//! - **Kinematics**: linear and oscillating obstacle bodies
//! - **Primitives**: cube, sphere and plane vertex buffers
//! - **Configuration**: TOML/RON loading for engine and physics settings
//!
//! ## Quick Start
//!
//! ```rust
//! use runner_engine::prelude::*;
//!
//! let cube = VertexBuffer::cube().bounding_volume()?;
//! let settings = CollisionSettings::default();
//!
//! let player = Transform::from_position(Vec3::new(0.0, 0.0, 1.5)).to_matrix();
//! let obstacle = Mat4::identity();
//! assert!(overlaps(&cube, &player, &cube, &obstacle, &settings)?);
//! assert!(!sphere_touches(0.5, &Vec3::new(0.0, 0.0, 2.0), &cube, &obstacle, &settings)?);
//! # Ok::<(), CollisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod primitives;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, EngineConfig, PhysicsConfig},
        foundation::{
            math::{Mat4, Quat, Transform, Vec2, Vec3},
            time::FrameTimer,
        },
        physics::{
            overlaps,
            sphere_touches,
            BoundingVolume,
            CollisionError,
            CollisionResult,
            CollisionSettings,
            KinematicBody,
            OscillationBounds,
            TransformConvention,
        },
        primitives::VertexBuffer,
    };
}
