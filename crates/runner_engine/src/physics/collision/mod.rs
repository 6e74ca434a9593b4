//! Bounding-volume collision tests
//!
//! # Architecture
//!
//! - **Model Space Storage**: a [`BoundingVolume`] is built once from a
//!   mesh's vertices and never changes afterwards
//! - **On-Demand Transformation**: the owning object's world matrix is only
//!   applied while a test runs
//! - **Explicit Frame Convention**: how matrices are inverted for a test is a
//!   [`TransformConvention`], never an implicit choice
//!
//! # Module Organization
//!
//! - [`bounding_volume`] - local-space box built from a vertex buffer
//! - [`overlap`] - box vs. box
//! - [`proximity`] - sphere vs. box
//! - [`convention`] - frame mapping shared by both tests

pub mod bounding_volume;
pub mod convention;
pub mod overlap;
pub mod proximity;

pub use bounding_volume::{BoundingVolume, DegenerateAxes};
pub use convention::{CollisionSettings, TransformConvention};
pub use overlap::overlaps;
pub use proximity::sphere_touches;
