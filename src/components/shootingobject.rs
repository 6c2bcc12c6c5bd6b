//! Straight-line projectile recycled through a getter pool.
//!
//! A [`ShootingObject`] travels from where it was spawned towards a fixed
//! target at constant speed. When it reaches (or passes) the target, the
//! [`shooting_object_system`](crate::systems::shootingobject::shooting_object_system)
//! hands the entity back to its pool and asks to be moved to the front of the
//! queue, since it finished sooner than the pool's FIFO rotation expected.
//!
//! # Related
//!
//! - [`crate::components::lineshooter::LineShooter`] – the hazard that fires these
//! - [`crate::events::pool::PoolReleaseEvent`] – how the projectile returns to its pool

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// Below this alignment between travel direction and direction-to-target the
/// projectile counts as arrived.
pub const ARRIVAL_ALIGNMENT: f32 = 0.9;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ShootingObject {
    /// Units per second.
    pub speed: f32,
    /// Where the projectile is heading.
    pub target: MapPosition,
    /// Unit travel direction, fixed at shot time.
    pub direction: (f32, f32),
    /// `false` until shot, and again once it has arrived.
    pub shot: bool,
}

impl ShootingObject {
    pub fn new(speed: f32) -> Self {
        ShootingObject {
            speed,
            ..Default::default()
        }
    }

    /// Aim from `from` towards `target` and start moving.
    ///
    /// A target equal to the origin leaves the projectile idle.
    pub fn shoot(&mut self, from: MapPosition, target: MapPosition) {
        self.target = target;
        let dx = target.x - from.x;
        let dy = target.y - from.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            self.direction = (0.0, 0.0);
            self.shot = false;
            return;
        }
        self.direction = (dx / len, dy / len);
        self.shot = true;
    }

    /// Returns `true` when `position` has reached or passed the target.
    pub fn has_arrived(&self, position: MapPosition) -> bool {
        let dx = self.target.x - position.x;
        let dy = self.target.y - position.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return true;
        }
        let alignment = (self.direction.0 * dx + self.direction.1 * dy) / len;
        alignment < ARRIVAL_ALIGNMENT
    }
}
