//! Hazard that drops plain-pool objects at random points along a segment.
//!
//! Paired with a [`Timer`](crate::components::timer::Timer) on the same entity
//! whose duration is the spawn period. The timer is started in looping mode by
//! [`random_spawn_line_start_system`](crate::systems::randomspawnline::random_spawn_line_start_system);
//! every completion spawns one object from the configured plain pool.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::resources::objectpool::PoolCategory;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RandomSpawnLine {
    pub category: PoolCategory,
    pub start: MapPosition,
    pub end: MapPosition,
}

impl RandomSpawnLine {
    pub fn new(category: PoolCategory, start: MapPosition, end: MapPosition) -> Self {
        RandomSpawnLine {
            category,
            start,
            end,
        }
    }

    /// Point on the segment at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> MapPosition {
        self.start.lerp(self.end, t.clamp(0.0, 1.0))
    }
}
