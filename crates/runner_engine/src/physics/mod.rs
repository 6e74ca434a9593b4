//! Physics module for collision detection and obstacle motion
//!
//! Everything here is pairwise and per frame: there is no broad-phase
//! structure, no contact manifold and no collision response. A query answers
//! a single yes/no question for one pair of objects.

pub mod collision;
pub mod kinematic;

pub use collision::{
    overlaps,
    sphere_touches,
    BoundingVolume,
    CollisionSettings,
    DegenerateAxes,
    TransformConvention,
};
pub use kinematic::{KinematicBody, OscillationBounds};

/// Errors raised by collision construction and queries
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// Input violates the caller contract (empty buffer, NaN transform, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for collision operations
pub type CollisionResult<T> = Result<T, CollisionError>;
