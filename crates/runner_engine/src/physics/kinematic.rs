//! Kinematic bodies for obstacles
//!
//! A body either drifts linearly or oscillates back and forth between 2D
//! bounds. There is no mass and no collision response; the body only produces
//! a position that the owner turns into a model matrix.

use crate::foundation::math::{Vec2, Vec3};

/// X/Y limits an oscillating body bounces between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillationBounds {
    /// Lower X/Y limit
    pub min: Vec2,

    /// Upper X/Y limit
    pub max: Vec2,
}

impl OscillationBounds {
    /// Create bounds from two opposite corners
    ///
    /// The corners are sorted per axis, so `min <= max` always holds.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }
}

/// Position, velocity and acceleration of one moving obstacle
///
/// Velocity is in units per millisecond when driven by the game loop. The
/// oscillation acceleration is applied once per step, not scaled by the step
/// length.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// Current position
    pub position: Vec3,

    /// Current velocity
    pub velocity: Vec3,

    /// Per-step velocity change (oscillating bodies only)
    pub acceleration: Vec3,

    /// Whether the body bounces between bounds
    pub oscillates: bool,

    warned_unbounded: bool,
}

impl KinematicBody {
    /// Create a body with every field given
    pub fn new(position: Vec3, velocity: Vec3, acceleration: Vec3, oscillates: bool) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            oscillates,
            warned_unbounded: false,
        }
    }

    /// Create a body that drifts at constant velocity
    pub fn linear(position: Vec3, velocity: Vec3) -> Self {
        Self::new(position, velocity, Vec3::zeros(), false)
    }

    /// Create a body that bounces between bounds
    pub fn oscillating(position: Vec3, velocity: Vec3, acceleration: Vec3) -> Self {
        Self::new(position, velocity, acceleration, true)
    }

    /// Advance the body by `delta_time`
    ///
    /// Linear bodies ignore `bounds` and acceleration. Oscillating bodies:
    /// 1. add the acceleration to the velocity,
    /// 2. clamp `position.x` into the X bounds,
    /// 3. reverse the whole velocity when sitting at or past an upper bound
    ///    (X or Y) while moving towards +X,
    /// 4. reverse it when at or past a lower bound while moving towards -X,
    /// 5. move by `velocity * delta_time`.
    ///
    /// The bounce only looks at the X velocity, so a body moving purely along
    /// Y never turns around.
    pub fn update(&mut self, delta_time: f32, bounds: Option<OscillationBounds>) {
        if self.oscillates {
            self.velocity += self.acceleration;

            match bounds {
                Some(bounds) => self.bounce(&bounds),
                None if !self.warned_unbounded => {
                    log::warn!("Oscillating body at {:?} updated without bounds", self.position);
                    self.warned_unbounded = true;
                }
                None => {}
            }
        }

        self.position += self.velocity * delta_time;
    }

    fn bounce(&mut self, bounds: &OscillationBounds) {
        self.position.x = self.position.x.clamp(bounds.min.x, bounds.max.x);

        let at_upper = self.position.x >= bounds.max.x || self.position.y >= bounds.max.y;
        if at_upper && self.velocity.x > 0.0 {
            self.velocity = -self.velocity;
        }

        let at_lower = self.position.x <= bounds.min.x || self.position.y <= bounds.min.y;
        if at_lower && self.velocity.x < 0.0 {
            self.velocity = -self.velocity;
        }
    }

    /// Shift the body without touching its velocity
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}

// The unbounded-warning latch is logging state, not motion state.
impl PartialEq for KinematicBody {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.velocity == other.velocity
            && self.acceleration == other.acceleration
            && self.oscillates == other.oscillates
    }
}
