//! Obstacle groups
//!
//! Each group is a pair of cube obstacles laid out by one of four patterns.
//! The bodies oscillate between their own X/Y bounds while the whole group
//! scrolls towards the player along +Z.

use rand::Rng;
use serde::{Deserialize, Serialize};

use runner_engine::foundation::math::{Vec2, Vec3};
use runner_engine::physics::{
    overlaps, sphere_touches, BoundingVolume, CollisionResult, CollisionSettings, KinematicBody,
    OscillationBounds,
};

use crate::components::{Object3D, Player};

/// Which query decides a hit against the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Player box vs. obstacle box
    #[default]
    Box,
    /// Player sphere vs. obstacle box
    Sphere,
}

/// Obstacle layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstaclePattern {
    /// Two flat slabs sweeping across the track together
    Sweep,
    /// Two tall walls closing in from both sides
    Converge,
    /// Two bars crossing each other
    Cross,
    /// Two slabs moving up and down
    Vertical,
}

/// Start state of one obstacle in a pattern
#[derive(Debug, Clone, Copy)]
struct Placement {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    bounds: OscillationBounds,
}

impl Placement {
    fn new(position: Vec3, velocity: Vec3, acceleration: Vec3, min: Vec2, max: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            bounds: OscillationBounds::new(min, max),
        }
    }
}

impl ObstaclePattern {
    /// Every pattern, in spawn-table order
    pub const ALL: [Self; 4] = [Self::Sweep, Self::Converge, Self::Cross, Self::Vertical];

    /// Pick a pattern uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Render scale of every obstacle in the pattern
    pub fn scale(self) -> Vec3 {
        match self {
            Self::Sweep | Self::Vertical => Vec3::new(1.5, 0.5, 1.5),
            Self::Converge => Vec3::new(0.5, 2.0, 3.0),
            Self::Cross => Vec3::new(1.5, 0.5, 0.5),
        }
    }

    fn placements(self, z: f32, speed: f32) -> [Placement; 2] {
        let wide = (Vec2::new(-5.0, -2.0), Vec2::new(5.0, 2.0));
        match self {
            Self::Sweep => {
                let velocity = Vec3::new(0.005 * speed, 0.0, 0.0);
                [
                    Placement::new(Vec3::new(-4.0, 0.0, z), velocity, Vec3::zeros(), wide.0, wide.1),
                    Placement::new(Vec3::new(-3.0, 0.0, z + 1.0), velocity, Vec3::zeros(), wide.0, wide.1),
                ]
            }
            Self::Converge => [
                Placement::new(
                    Vec3::new(-5.0, 0.0, z),
                    Vec3::new(-0.001 * speed, 0.0, 0.0),
                    Vec3::new(0.0001, 0.0, 0.0),
                    Vec2::new(-5.0, -2.0),
                    Vec2::new(-0.5, 2.0),
                ),
                Placement::new(
                    Vec3::new(5.0, 0.0, z),
                    Vec3::new(0.001 * speed, 0.0, 0.0),
                    Vec3::new(-0.0001, 0.0, 0.0),
                    Vec2::new(0.5, -2.0),
                    Vec2::new(5.0, 2.0),
                ),
            ],
            Self::Cross => [
                Placement::new(
                    Vec3::new(5.0, 0.0, z),
                    Vec3::new(-0.01 * speed, 0.0, 0.0),
                    Vec3::new(0.0001, 0.0, 0.0),
                    wide.0,
                    wide.1,
                ),
                Placement::new(
                    Vec3::new(-5.0, 0.0, z + 1.0),
                    Vec3::new(0.01 * speed, 0.0, 0.0),
                    Vec3::new(-0.0001, 0.0, 0.0),
                    wide.0,
                    wide.1,
                ),
            ],
            Self::Vertical => [
                Placement::new(
                    Vec3::new(0.0, 0.0, z),
                    Vec3::new(0.0, -0.003 * speed, 0.0),
                    Vec3::zeros(),
                    Vec2::new(-1.0, 0.0),
                    Vec2::new(1.0, 5.0),
                ),
                Placement::new(
                    Vec3::new(0.0, 0.0, z + 2.0),
                    Vec3::new(0.0, 0.003 * speed, 0.0),
                    Vec3::zeros(),
                    Vec2::new(-1.0, -3.0),
                    Vec2::new(1.0, 2.0),
                ),
            ],
        }
    }
}

/// One moving obstacle and the bounds it bounces between
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Scene object (always carries a body)
    pub object: Object3D,

    /// Oscillation limits
    pub bounds: OscillationBounds,
}

/// A pattern instance on the track
#[derive(Debug, Clone)]
pub struct ObstacleGroup {
    pattern: ObstaclePattern,
    obstacles: Vec<Obstacle>,
}

impl ObstacleGroup {
    /// Lay out `pattern` at track depth `z`
    ///
    /// `speed` scales every starting velocity; `volume` is the obstacle
    /// mesh's bounding volume, shared by value.
    pub fn new(pattern: ObstaclePattern, z: f32, speed: f32, volume: &BoundingVolume) -> Self {
        let obstacles = pattern
            .placements(z, speed)
            .iter()
            .map(|placement| Obstacle {
                object: Object3D::new("cube", "snow", volume.clone())
                    .with_scale(pattern.scale())
                    .with_body(KinematicBody::oscillating(
                        placement.position,
                        placement.velocity,
                        placement.acceleration,
                    )),
                bounds: placement.bounds,
            })
            .collect();

        Self { pattern, obstacles }
    }

    /// Pattern this group was built from
    pub fn pattern(&self) -> ObstaclePattern {
        self.pattern
    }

    /// Obstacles in the group
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Advance every body and scroll the group `scroll` units along +Z
    pub fn update(&mut self, delta_time: f32, scroll: f32) {
        for obstacle in &mut self.obstacles {
            if let Some(body) = obstacle.object.body.as_mut() {
                body.update(delta_time, Some(obstacle.bounds));
                body.translate(Vec3::new(0.0, 0.0, scroll));
            }
            obstacle.object.refresh_transform();
        }
    }

    /// True when any obstacle touches the player
    ///
    /// A failed query is logged and counts as a miss.
    pub fn collides_with(&self, player: &Player, settings: &CollisionSettings, mode: CollisionMode) -> bool {
        self.obstacles.iter().any(|obstacle| {
            match Self::query(obstacle, player, settings, mode) {
                Ok(hit) => hit,
                Err(e) => {
                    log::warn!("Collision query for {:?} failed: {}", self.pattern, e);
                    false
                }
            }
        })
    }

    fn query(
        obstacle: &Obstacle,
        player: &Player,
        settings: &CollisionSettings,
        mode: CollisionMode,
    ) -> CollisionResult<bool> {
        let object = &obstacle.object;
        match mode {
            CollisionMode::Box => overlaps(
                &player.object.volume,
                player.model_matrix(),
                &object.volume,
                &object.model_matrix,
                settings,
            ),
            CollisionMode::Sphere => sphere_touches(
                player.radius,
                &player.center(),
                &object.volume,
                &object.model_matrix,
                settings,
            ),
        }
    }

    /// Depth of the obstacle closest to the player (largest Z)
    pub fn front_z(&self) -> f32 {
        self.depths().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Depth of the obstacle furthest from the player (smallest Z)
    pub fn back_z(&self) -> f32 {
        self.depths().fold(f32::INFINITY, f32::min)
    }

    fn depths(&self) -> impl Iterator<Item = f32> + '_ {
        self.obstacles.iter().map(|obstacle| obstacle.object.position().z)
    }
}
