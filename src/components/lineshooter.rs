//! Hazard that fires pooled projectiles along a fixed line.
//!
//! The [`LineShooter`] works together with a [`Timer`](crate::components::timer::Timer)
//! on the same entity: the timer's duration is the time between shots.
//!
//! # How It Works
//!
//! 1. Entity is spawned with a `LineShooter`, a `Timer` and a `MapPosition`
//! 2. [`line_shooter_start_system`](crate::systems::lineshooter::line_shooter_start_system)
//!    starts the timer in looping mode and fires the first shot right away
//! 3. Every loop completion triggers a [`TimerEvent`](crate::events::timer::TimerEvent);
//!    [`line_shooter_observer`](crate::systems::lineshooter::line_shooter_observer)
//!    fires another shot from the getter pool
//!
//! # Example
//!
//! ```ignore
//! world.spawn((
//!     MapPosition::new(0.0, 100.0),
//!     Timer::new(0.75),
//!     LineShooter::new(PoolCategory::ShootingObject, (1.0, 0.0), 240.0, 180.0),
//! ));
//! ```

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::resources::objectpool::PoolCategory;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct LineShooter {
    /// Getter pool the projectiles come from.
    pub category: PoolCategory,
    /// Unit firing direction.
    pub direction: (f32, f32),
    /// How far each shot travels.
    pub distance: f32,
    /// Projectile speed in units per second.
    pub speed: f32,
}

impl LineShooter {
    /// Create a shooter. `direction` is normalized; a zero vector fires to the right.
    pub fn new(category: PoolCategory, direction: (f32, f32), distance: f32, speed: f32) -> Self {
        let len = (direction.0 * direction.0 + direction.1 * direction.1).sqrt();
        let direction = if len > f32::EPSILON {
            (direction.0 / len, direction.1 / len)
        } else {
            (1.0, 0.0)
        };
        LineShooter {
            category,
            direction,
            distance,
            speed,
        }
    }

    /// Point the shots aim at, seen from `origin`.
    pub fn target_from(&self, origin: MapPosition) -> MapPosition {
        origin.offset(
            self.direction.0 * self.distance,
            self.direction.1 * self.distance,
        )
    }
}
