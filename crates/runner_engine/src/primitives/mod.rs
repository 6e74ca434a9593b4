//! Procedural mesh primitives
//!
//! Position-only geometry for the shapes the runner draws: obstacle cubes,
//! the player sphere and the track plane. Their vertex buffers feed
//! [`crate::physics::BoundingVolume`] construction.

pub mod mesh;

pub use mesh::VertexBuffer;
