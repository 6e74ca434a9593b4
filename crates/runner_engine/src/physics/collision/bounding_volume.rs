//! Local-space bounding boxes built from mesh geometry
//!
//! A [`BoundingVolume`] is computed once per mesh at scene setup and owned by
//! the object that references it. It stays in the mesh's model space; the
//! world matrix is applied by the tests in [`super::overlap`] and
//! [`super::proximity`].

use bitflags::bitflags;

use crate::foundation::math::{is_finite_vec3, transform_point, Mat4, Vec3};
use crate::physics::{CollisionError, CollisionResult};

bitflags! {
    /// Axes on which a bounding volume has zero extent
    ///
    /// Flat or point-like meshes are legal; the overlap math treats a
    /// zero-width axis as an equality check.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DegenerateAxes: u8 {
        /// No extent along X
        const X = 1 << 0;
        /// No extent along Y
        const Y = 1 << 1;
        /// No extent along Z
        const Z = 1 << 2;
    }
}

/// Axis-aligned box in a mesh's local space
///
/// Invariants:
/// - `local_min` components are less than or equal to `local_max` components.
/// - Every vertex the volume was built from lies inside it (inclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingVolume {
    local_min: Vec3,
    local_max: Vec3,
    recenter_transform: Mat4,
}

impl BoundingVolume {
    /// Builds the tightest box around a flat `[x, y, z, x, y, z, ...]` buffer
    ///
    /// Every vertex is visited, duplicates included.
    ///
    /// # Errors
    /// `InvalidArgument` when the buffer is empty, its length is not a
    /// multiple of three, or a coordinate is not finite.
    pub fn from_vertex_buffer(vertices: &[f32]) -> CollisionResult<Self> {
        if vertices.is_empty() {
            return Err(CollisionError::InvalidArgument(
                "cannot build a bounding volume from an empty vertex buffer".to_string(),
            ));
        }
        if vertices.len() % 3 != 0 {
            return Err(CollisionError::InvalidArgument(format!(
                "vertex buffer length {} is not a multiple of 3",
                vertices.len()
            )));
        }

        Self::fold(
            vertices
                .chunks_exact(3)
                .map(|xyz| Vec3::new(xyz[0], xyz[1], xyz[2])),
        )
    }

    /// Builds the tightest box around a list of points
    ///
    /// # Errors
    /// `InvalidArgument` when `points` is empty or contains a non-finite point.
    pub fn from_points(points: &[Vec3]) -> CollisionResult<Self> {
        Self::fold(points.iter().copied())
    }

    /// Wraps an explicit extent
    ///
    /// # Errors
    /// `InvalidArgument` when a corner is not finite or `min > max` on any axis.
    pub fn new(local_min: Vec3, local_max: Vec3) -> CollisionResult<Self> {
        if !is_finite_vec3(&local_min) || !is_finite_vec3(&local_max) {
            return Err(CollisionError::InvalidArgument(
                "bounding volume corners must be finite".to_string(),
            ));
        }
        if local_min.iter().zip(local_max.iter()).any(|(lo, hi)| lo > hi) {
            return Err(CollisionError::InvalidArgument(format!(
                "bounding volume min {local_min:?} exceeds max {local_max:?}"
            )));
        }
        Ok(Self::from_extent(local_min, local_max))
    }

    fn fold(points: impl IntoIterator<Item = Vec3>) -> CollisionResult<Self> {
        let mut points = points.into_iter();
        let first = points.next().ok_or_else(|| {
            CollisionError::InvalidArgument("cannot build a bounding volume from zero vertices".to_string())
        })?;
        check_vertex(&first)?;

        let (min, max) = points.try_fold((first, first), |(min, max), point| {
            check_vertex(&point)?;
            Ok::<_, CollisionError>((min.inf(&point), max.sup(&point)))
        })?;

        let volume = Self::from_extent(min, max);
        let degenerate = volume.degenerate_axes();
        if !degenerate.is_empty() {
            log::debug!("Bounding volume {min:?}..{max:?} has no extent on {degenerate:?}");
        }
        Ok(volume)
    }

    fn from_extent(local_min: Vec3, local_max: Vec3) -> Self {
        let mut volume = Self {
            local_min,
            local_max,
            recenter_transform: Mat4::identity(),
        };
        volume.recenter_transform = Mat4::new_nonuniform_scaling(&volume.half_extents());
        volume
    }

    /// Minimum corner in local space
    pub fn local_min(&self) -> Vec3 {
        self.local_min
    }

    /// Maximum corner in local space
    pub fn local_max(&self) -> Vec3 {
        self.local_max
    }

    /// Maps the canonical ±1 cube onto the box's size
    ///
    /// Only the half-size scale is applied, there is no translation to the
    /// box centre. For a mesh that is not centred on its origin the unit cube
    /// ends up the right size in the wrong place; use
    /// [`Self::centered_transform`] when that matters.
    pub fn recenter_transform(&self) -> &Mat4 {
        &self.recenter_transform
    }

    /// Maps the canonical ±1 cube exactly onto the box (scale, then move to centre)
    pub fn centered_transform(&self) -> Mat4 {
        Mat4::new_translation(&self.center()) * self.recenter_transform
    }

    /// Centre of the box in local space
    pub fn center(&self) -> Vec3 {
        (self.local_min + self.local_max) * 0.5
    }

    /// Half of the box size on each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.local_max - self.local_min) * 0.5
    }

    /// Axes on which min == max
    pub fn degenerate_axes(&self) -> DegenerateAxes {
        let extent = self.local_max - self.local_min;
        let mut axes = DegenerateAxes::empty();
        for (flag, size) in [DegenerateAxes::X, DegenerateAxes::Y, DegenerateAxes::Z]
            .into_iter()
            .zip(extent.iter())
        {
            if *size == 0.0 {
                axes |= flag;
            }
        }
        axes
    }

    /// True when `point` lies inside the box (inclusive), in local space
    pub fn contains_local(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| self.local_min[axis] <= point[axis] && point[axis] <= self.local_max[axis])
    }

    /// The eight corners in local space
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.local_min, self.local_max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned bounds of the box after `matrix` is applied to all eight corners
    pub fn world_bounds(&self, matrix: &Mat4) -> (Vec3, Vec3) {
        enclose(self.corners().iter().map(|corner| transform_point(matrix, corner)))
    }
}

/// Component-wise min/max over a non-empty set of points
pub(crate) fn enclose(mut points: impl Iterator<Item = Vec3>) -> (Vec3, Vec3) {
    let first = points.next().unwrap_or_else(Vec3::zeros);
    points.fold((first, first), |(min, max), point| (min.inf(&point), max.sup(&point)))
}

fn check_vertex(vertex: &Vec3) -> CollisionResult<()> {
    if is_finite_vec3(vertex) {
        Ok(())
    } else {
        Err(CollisionError::InvalidArgument(format!("vertex {vertex:?} is not finite")))
    }
}
