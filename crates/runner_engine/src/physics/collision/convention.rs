//! How world matrices are mapped into a test's comparison frame
//!
//! The runner only ever builds model matrices from a translation, a rotation
//! and a (mostly uniform) scale. For those, the inverse of the 3x3 block is
//! its transpose divided by the squared scale, which is what
//! [`TransformConvention::RigidTranspose`] uses. Skewed or non-uniformly
//! scaled matrices break that assumption; the tests stay well defined but can
//! mis-classify. [`TransformConvention::GeneralInverse`] is the opt-in,
//! exact alternative.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{is_finite_matrix, Mat3, Mat4, Vec3};
use crate::physics::{CollisionError, CollisionResult};

/// Frame mapping used by the overlap and proximity tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformConvention {
    /// Transpose-based inverse, two stored corners mapped per box
    ///
    /// Exact for rotation + uniform scale + translation. The box keeps its
    /// min/max corner pair, so only axis-aligned (quarter-turn) rotations
    /// preserve its full extent.
    #[default]
    RigidTranspose,

    /// True matrix inverse, all eight corners enclosed per box
    ///
    /// Conservative for arbitrary affine matrices.
    GeneralInverse,
}

impl TransformConvention {
    /// Inverse of `matrix` under this convention
    ///
    /// # Errors
    /// `InvalidArgument` when the matrix has no inverse (zero scale).
    pub fn invert(self, matrix: &Mat4) -> CollisionResult<Mat4> {
        match self {
            Self::RigidTranspose => rigid_inverse(matrix),
            Self::GeneralInverse => matrix.try_inverse().ok_or_else(|| {
                CollisionError::InvalidArgument("transform is singular and cannot be inverted".to_string())
            }),
        }
    }
}

/// Tunables shared by every collision query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Slack allowed by the inclusive between-test
    pub epsilon: f32,

    /// How matrices are inverted and how many corners are mapped
    pub convention: TransformConvention,

    /// Log a warning when a transform is not rotation + uniform scale
    pub warn_on_non_rigid: bool,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            epsilon: f32::EPSILON,
            convention: TransformConvention::RigidTranspose,
            warn_on_non_rigid: false,
        }
    }
}

impl CollisionSettings {
    /// Builder pattern: Set convention
    pub fn with_convention(mut self, convention: TransformConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Builder pattern: Set epsilon
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Rejects non-finite matrices and optionally reports skewed ones
    pub(crate) fn check_transform(&self, matrix: &Mat4, label: &str) -> CollisionResult<()> {
        if !is_finite_matrix(matrix) {
            return Err(CollisionError::InvalidArgument(format!(
                "{label} transform has non-finite components"
            )));
        }
        if self.warn_on_non_rigid
            && self.convention == TransformConvention::RigidTranspose
            && !looks_rigid(matrix, 1e-4)
        {
            log::warn!("{label} transform is not rotation + uniform scale, collision result may be wrong");
        }
        Ok(())
    }
}

/// Upper-left 3x3 block of an affine matrix
pub(crate) fn linear_part(matrix: &Mat4) -> Mat3 {
    Mat3::new(
        matrix[(0, 0)], matrix[(0, 1)], matrix[(0, 2)],
        matrix[(1, 0)], matrix[(1, 1)], matrix[(1, 2)],
        matrix[(2, 0)], matrix[(2, 1)], matrix[(2, 2)],
    )
}

fn translation_part(matrix: &Mat4) -> Vec3 {
    Vec3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)])
}

/// Inverse of a rotation + uniform scale + translation matrix via the transpose
///
/// `(s·R)⁻¹ = Rᵀ / s = (s·R)ᵀ / s²`, with `s²` read from the first column.
///
/// # Errors
/// `InvalidArgument` when the first column has zero length.
pub fn rigid_inverse(matrix: &Mat4) -> CollisionResult<Mat4> {
    let linear = linear_part(matrix);
    let scale_squared = linear.column(0).norm_squared();
    if scale_squared <= f32::MIN_POSITIVE || !scale_squared.is_finite() {
        return Err(CollisionError::InvalidArgument(
            "transform has zero scale and cannot be inverted".to_string(),
        ));
    }

    let inverse_linear = linear.transpose() / scale_squared;
    let inverse_translation = -(inverse_linear * translation_part(matrix));

    let mut inverse = inverse_linear.to_homogeneous();
    inverse[(0, 3)] = inverse_translation.x;
    inverse[(1, 3)] = inverse_translation.y;
    inverse[(2, 3)] = inverse_translation.z;
    Ok(inverse)
}

/// True when the 3x3 block is a rotation times a uniform positive scale
///
/// Columns must be mutually orthogonal and of equal length (relative
/// `tolerance`).
pub fn looks_rigid(matrix: &Mat4, tolerance: f32) -> bool {
    let linear = linear_part(matrix);
    let lengths = [
        linear.column(0).norm_squared(),
        linear.column(1).norm_squared(),
        linear.column(2).norm_squared(),
    ];
    let reference = lengths[0];
    if reference <= f32::MIN_POSITIVE {
        return false;
    }

    let equal_lengths = lengths
        .iter()
        .all(|length| (length - reference).abs() <= tolerance * reference);
    let orthogonal = [(0, 1), (0, 2), (1, 2)]
        .iter()
        .all(|&(i, j)| linear.column(i).dot(&linear.column(j)).abs() <= tolerance * reference);

    equal_lengths && orthogonal
}
