//! Game-specific scene objects

use runner_engine::foundation::math::{transform_point, Mat4, Transform, Vec3};
use runner_engine::physics::{BoundingVolume, CollisionResult, KinematicBody};
use runner_engine::primitives::VertexBuffer;

/// Something drawn in the scene with a collision volume
///
/// The mesh and material names are only labels for the renderer; collision
/// code reads the model matrix and the volume.
#[derive(Debug, Clone)]
pub struct Object3D {
    /// Mesh name
    pub mesh: String,

    /// Material name
    pub material: String,

    /// Current world transform
    pub model_matrix: Mat4,

    /// Local-space bounds of the mesh
    pub volume: BoundingVolume,

    /// Motion, if the object moves by itself
    pub body: Option<KinematicBody>,

    /// Render scale applied on top of the body position
    pub scale: Vec3,
}

impl Object3D {
    /// Create a static object at the origin
    pub fn new(mesh: impl Into<String>, material: impl Into<String>, volume: BoundingVolume) -> Self {
        Self {
            mesh: mesh.into(),
            material: material.into(),
            model_matrix: Mat4::identity(),
            volume,
            body: None,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Builder pattern: Attach a kinematic body
    pub fn with_body(mut self, body: KinematicBody) -> Self {
        self.body = Some(body);
        self.refresh_transform();
        self
    }

    /// Builder pattern: Set render scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self.refresh_transform();
        self
    }

    /// Rebuild the model matrix from the body position and scale
    ///
    /// Objects without a body keep their current translation.
    pub fn refresh_transform(&mut self) {
        let position = self.position();
        self.model_matrix = Transform::from_position(position)
            .with_scale(self.scale)
            .to_matrix();
    }

    /// World position of the object's origin
    pub fn position(&self) -> Vec3 {
        match &self.body {
            Some(body) => body.position,
            None => transform_point(&self.model_matrix, &Vec3::zeros()),
        }
    }
}

/// The rolling ball the obstacles must miss
#[derive(Debug, Clone)]
pub struct Player {
    /// Sphere object (mesh volume is the unit sphere)
    pub object: Object3D,

    /// Sphere radius in world units
    pub radius: f32,
}

impl Player {
    /// Create the player sphere at `position`
    ///
    /// # Errors
    /// `InvalidArgument` when the sphere mesh cannot be built.
    pub fn new(position: Vec3, radius: f32) -> CollisionResult<Self> {
        let volume = VertexBuffer::uv_sphere(16, 32)?.bounding_volume()?;
        let mut object = Object3D::new("player", "player", volume);
        object.scale = Vec3::new(radius, radius, radius);
        object.model_matrix = Transform::from_position(position)
            .with_uniform_scale(radius)
            .to_matrix();
        Ok(Self { object, radius })
    }

    /// Sphere centre in world space
    pub fn center(&self) -> Vec3 {
        self.object.position()
    }

    /// Current world transform
    pub fn model_matrix(&self) -> &Mat4 {
        &self.object.model_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_object_follows_body() {
        let volume = VertexBuffer::cube().bounding_volume().unwrap();
        let mut object = Object3D::new("cube", "snow", volume)
            .with_scale(Vec3::new(1.5, 0.5, 1.5))
            .with_body(KinematicBody::linear(Vec3::new(1.0, 0.0, -5.0), Vec3::new(1.0, 0.0, 0.0)));

        if let Some(body) = object.body.as_mut() {
            body.update(2.0, None);
        }
        object.refresh_transform();

        assert_relative_eq!(object.position(), Vec3::new(3.0, 0.0, -5.0));
        let corner = transform_point(&object.model_matrix, &Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(corner, Vec3::new(4.5, 0.5, -3.5));
    }

    #[test]
    fn test_static_object_keeps_translation() {
        let volume = VertexBuffer::cube().bounding_volume().unwrap();
        let mut object = Object3D::new("cube", "snow", volume);
        object.model_matrix = Mat4::new_translation(&Vec3::new(0.0, 2.0, 0.0));
        object.scale = Vec3::new(2.0, 2.0, 2.0);
        object.refresh_transform();
        assert_relative_eq!(object.position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_player_sphere() {
        let player = Player::new(Vec3::new(0.0, 0.0, 0.0), 0.75).unwrap();
        assert_relative_eq!(player.center(), Vec3::zeros());
        let top = transform_point(player.model_matrix(), &Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(top, Vec3::new(0.0, 0.75, 0.0));
        assert_relative_eq!(player.object.volume.local_max().y, 1.0, epsilon = 1e-5);
    }
}
