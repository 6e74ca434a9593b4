//! The scrolling track
//!
//! Keeps a fixed number of obstacle groups in flight. Groups scroll towards
//! the player every frame; once a group has fully passed the far clip it is
//! dropped and a fresh one is spawned behind the rearmost group.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::{new_key_type, SlotMap};

use runner_engine::physics::{BoundingVolume, CollisionResult, CollisionSettings};
use runner_engine::primitives::VertexBuffer;

use crate::components::Player;
use crate::config::GameplayConfig;
use crate::obstacle::{ObstacleGroup, ObstaclePattern};

new_key_type! {
    /// Handle to a group on the track
    pub struct GroupKey;
}

/// What happened on the track during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackFrame {
    /// Groups that passed the far clip and were replaced
    pub recycled: u32,

    /// Whether any obstacle touched the player
    pub hit: bool,
}

/// Obstacle groups in flight
pub struct Track {
    groups: SlotMap<GroupKey, ObstacleGroup>,
    rng: StdRng,
    config: GameplayConfig,
    obstacle_volume: BoundingVolume,
}

impl Track {
    /// Build the track and spawn the initial groups
    ///
    /// # Errors
    /// `InvalidArgument` when the obstacle mesh cannot be bounded.
    pub fn new(config: &GameplayConfig) -> CollisionResult<Self> {
        let mut track = Self {
            groups: SlotMap::with_key(),
            rng: StdRng::seed_from_u64(config.seed),
            config: config.clone(),
            obstacle_volume: VertexBuffer::cube().bounding_volume()?,
        };
        track.populate();
        Ok(track)
    }

    /// Drop every group and spawn a fresh set
    ///
    /// The pattern sequence continues from the same generator.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.populate();
    }

    fn populate(&mut self) {
        for k in 0..self.config.groups_in_flight {
            let depth = self.config.spawn_depth - self.config.group_spacing * k as f32;
            self.spawn(depth);
        }
    }

    fn spawn(&mut self, depth: f32) -> GroupKey {
        let pattern = ObstaclePattern::random(&mut self.rng);
        log::debug!("Spawning {pattern:?} at z = {depth:.2}");
        self.groups.insert(ObstacleGroup::new(
            pattern,
            depth,
            self.config.difficulty_speed,
            &self.obstacle_volume,
        ))
    }

    /// Advance the track by `delta_time` milliseconds
    pub fn frame(&mut self, delta_time: f32, player: &Player, settings: &CollisionSettings) -> TrackFrame {
        let scroll = self.config.track_speed * delta_time;
        for group in self.groups.values_mut() {
            group.update(delta_time, scroll);
        }

        let hit = self
            .groups
            .values()
            .any(|group| group.collides_with(player, settings, self.config.collision_mode));

        let far_clip = self.config.far_clip;
        let passed: Vec<GroupKey> = self
            .groups
            .iter()
            .filter(|(_, group)| group.back_z() > far_clip)
            .map(|(key, _)| key)
            .collect();

        for key in &passed {
            self.groups.remove(*key);
        }
        for _ in &passed {
            let depth = self
                .rearmost_z()
                .map_or(self.config.spawn_depth, |rear| rear - self.config.group_spacing);
            self.spawn(depth);
        }

        log::trace!("Track frame: scroll {scroll:.4}, recycled {}, hit {hit}", passed.len());
        TrackFrame {
            recycled: u32::try_from(passed.len()).unwrap_or(u32::MAX),
            hit,
        }
    }

    fn rearmost_z(&self) -> Option<f32> {
        self.groups.values().map(ObstacleGroup::back_z).reduce(f32::min)
    }

    /// Groups currently on the track
    pub fn groups(&self) -> impl Iterator<Item = (GroupKey, &ObstacleGroup)> + '_ {
        self.groups.iter()
    }

    /// Number of groups on the track
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group is on the track
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
