//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of helpers the collision and
//! kinematics code needs: TRS model matrices, column-major conversion and the
//! inclusive between-test used by the overlap math.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type (column-major storage, like the renderer's uniforms)
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
///
/// This is what the rendering layer turns into an object's model matrix every
/// frame; the collision code only ever sees the resulting [`Mat4`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position, rotation and scale
    pub fn from_rotation_translation_scale(rotation: Quat, position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Builder pattern: Set per-axis scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set uniform scale
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Build a matrix from 16 floats laid out column by column
///
/// This is the layout WebGL-style renderers hand over (`m[12..15]` is the
/// translation).
pub fn mat4_from_column_major(columns: &[f32; 16]) -> Mat4 {
    Mat4::from_column_slice(columns)
}

/// Apply a homogeneous transform to a point
pub fn transform_point(matrix: &Mat4, point: &Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(*point)).coords
}

/// True when every entry of the matrix is a finite number
pub fn is_finite_matrix(matrix: &Mat4) -> bool {
    matrix.iter().all(|value| value.is_finite())
}

/// True when every component of the vector is a finite number
pub fn is_finite_vec3(vector: &Vec3) -> bool {
    vector.iter().all(|value| value.is_finite())
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;
}

/// Math utility functions
pub mod utils {
    /// Inclusive, order-agnostic "x lies between n1 and n2" test
    ///
    /// `|x - n1| + |n2 - x| - |n1 - n2| <= epsilon`. Works whichever of `n1`
    /// and `n2` is larger and collapses to an equality check when they match.
    pub fn is_between(x: f32, n1: f32, n2: f32, epsilon: f32) -> bool {
        (x - n1).abs() + (n2 - x).abs() - (n1 - n2).abs() <= epsilon
    }
}
