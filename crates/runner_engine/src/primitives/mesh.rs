//! Vertex buffers for procedural shapes
//!
//! Positions are stored as `[f32; 3]` triples and can be viewed as the flat
//! `[x, y, z, x, y, z, ...]` layout GPU uploads and bounding volume
//! construction expect.

use crate::foundation::math::{constants::PI, Vec2, Vec3};
use crate::physics::{BoundingVolume, CollisionError, CollisionResult};

/// Triangle geometry with positions only
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBuffer {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl VertexBuffer {
    /// Create a new vertex buffer
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Positions as one flat slice of floats
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounding volume around every vertex
    ///
    /// # Errors
    /// `InvalidArgument` when the buffer is empty or holds non-finite positions.
    pub fn bounding_volume(&self) -> CollisionResult<BoundingVolume> {
        BoundingVolume::from_vertex_buffer(self.as_flat())
    }

    /// Unit cube centred on the origin with corners at ±1
    ///
    /// 8 shared vertices, 36 indices.
    pub fn cube() -> Self {
        let positions = vec![
            // Front
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
            // Back
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0],
        ];

        let indices = vec![
            0, 1, 2, 2, 3, 0, // front
            4, 5, 6, 6, 7, 4, // back
            4, 0, 3, 3, 5, 4, // left
            1, 7, 6, 6, 2, 1, // right
            3, 2, 6, 6, 5, 3, // top
            4, 7, 1, 1, 0, 4, // bottom
        ];

        Self::new(positions, indices)
    }

    /// Unit-radius UV sphere centred on the origin
    ///
    /// `rings` latitude bands from pole to pole, `sectors` longitude slices.
    /// Each ring row repeats its seam vertex so both poles are included.
    ///
    /// # Errors
    /// `InvalidArgument` when `rings < 2` or `sectors < 3`.
    pub fn uv_sphere(rings: u32, sectors: u32) -> CollisionResult<Self> {
        if rings < 2 || sectors < 3 {
            return Err(CollisionError::InvalidArgument(format!(
                "uv sphere needs at least 2 rings and 3 sectors, got {rings}x{sectors}"
            )));
        }

        let mut positions = Vec::with_capacity(((rings + 1) * (sectors + 1)) as usize);
        for ring in 0..=rings {
            let phi = PI * ring as f32 / rings as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for sector in 0..=sectors {
                let theta = 2.0 * PI * sector as f32 / sectors as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                positions.push([sin_phi * cos_theta, cos_phi, sin_phi * sin_theta]);
            }
        }

        let row = sectors + 1;
        let mut indices = Vec::with_capacity((rings * sectors * 6) as usize);
        for ring in 0..rings {
            for sector in 0..sectors {
                let current = ring * row + sector;
                let below = current + row;
                indices.extend_from_slice(&[current, below, current + 1]);
                indices.extend_from_slice(&[current + 1, below, below + 1]);
            }
        }

        Ok(Self::new(positions, indices))
    }

    /// Flat quad in the XZ plane at `y = 0`
    ///
    /// `min`/`max` are the (x, z) corners. The result has no extent on Y.
    pub fn plane(min: Vec2, max: Vec2) -> Self {
        let positions = vec![
            [min.x, 0.0, min.y],
            [max.x, 0.0, min.y],
            [max.x, 0.0, max.y],
            [min.x, 0.0, max.y],
        ];
        Self::new(positions, vec![0, 2, 1, 0, 3, 2])
    }

    /// Vertex `index` as a vector
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).map(|p| Vec3::new(p[0], p[1], p[2]))
    }
}
