//! Thrown wind projectile recycled through a getter pool.
//!
//! A [`Windball`] is thrown with an initial speed that bleeds off over time.
//! While it is still fast it pushes whatever it hits; once it slows under
//! `hover_speed` it stops and hovers in place, waiting to be touched (a player
//! touching a hovering windball gets its double jump back). Touching anything
//! in either state hands the windball back to its pool, promoted to the front
//! of the queue so the next cast reuses it.
//!
//! Cast by a [`WindballCaster`] whose [`AbilityCooldown`](crate::components::cooldown::AbilityCooldown)
//! gates how often it can throw.
//!
//! # Related
//!
//! - [`crate::systems::windball`] – casting, flight and release
//! - [`crate::events::pool::PoolReleaseEvent`] – how the windball returns to its pool

use bevy_ecs::prelude::Component;

use crate::resources::objectpool::PoolCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindballState {
    /// In the pool, or thrown with no direction.
    #[default]
    Idle,
    /// Flying fast enough to push what it hits.
    Pushing,
    /// Slowed down and hovering.
    Hovering,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Windball {
    /// Unit travel direction, fixed at throw time.
    pub direction: (f32, f32),
    /// Current speed in units per second.
    pub speed: f32,
    /// Speed lost per second while flying.
    pub drag: f32,
    /// Below this speed the windball stops and hovers.
    pub hover_speed: f32,
    /// Charge in `[0, 1]` the windball was thrown with.
    pub charge: f32,
    pub state: WindballState,
}

impl Windball {
    pub fn new(drag: f32, hover_speed: f32) -> Self {
        Windball {
            drag,
            hover_speed,
            ..Default::default()
        }
    }

    /// Throw along `direction` at `speed`.
    ///
    /// A zero direction leaves the windball hovering where it spawned.
    pub fn throw(&mut self, direction: (f32, f32), speed: f32, charge: f32) {
        self.charge = charge.clamp(0.0, 1.0);
        let len = (direction.0 * direction.0 + direction.1 * direction.1).sqrt();
        if len <= f32::EPSILON || speed <= self.hover_speed {
            self.direction = (0.0, 0.0);
            self.speed = 0.0;
            self.state = WindballState::Hovering;
            return;
        }
        self.direction = (direction.0 / len, direction.1 / len);
        self.speed = speed;
        self.state = WindballState::Pushing;
    }

    /// Advance the flight by `dt` seconds and return the displacement.
    pub fn step(&mut self, dt: f32) -> (f32, f32) {
        if self.state != WindballState::Pushing {
            return (0.0, 0.0);
        }
        let delta = (
            self.direction.0 * self.speed * dt,
            self.direction.1 * self.speed * dt,
        );
        self.speed = (self.speed - self.drag * dt).max(0.0);
        if self.speed <= self.hover_speed {
            self.speed = 0.0;
            self.state = WindballState::Hovering;
        }
        delta
    }

    /// `true` while thrown and not yet released.
    pub fn is_live(&self) -> bool {
        self.state != WindballState::Idle
    }

    /// Forget the throw. Called when the windball goes back to its pool.
    pub fn reset(&mut self) {
        self.direction = (0.0, 0.0);
        self.speed = 0.0;
        self.charge = 0.0;
        self.state = WindballState::Idle;
    }
}

/// Throw strength range of a caster, picked by charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowRange {
    pub min_speed: f32,
    pub max_speed: f32,
}

impl ThrowRange {
    pub fn speed_for(&self, charge: f32) -> f32 {
        self.min_speed + (self.max_speed - self.min_speed) * charge.clamp(0.0, 1.0)
    }
}

/// Entity able to cast windballs. Needs an `AbilityCooldown` and a `MapPosition`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct WindballCaster {
    /// Getter pool the windballs come from.
    pub category: PoolCategory,
    /// Aim direction; the windball spawns one aim vector away from the caster.
    pub aim: (f32, f32),
    pub throw: ThrowRange,
    /// Charge used for the next cast.
    pub charge: f32,
    /// Cast whenever the cooldown allows, without waiting for a request.
    pub auto_cast: bool,
    requested: bool,
}

impl WindballCaster {
    pub fn new(category: PoolCategory, aim: (f32, f32), throw: ThrowRange) -> Self {
        WindballCaster {
            category,
            aim,
            throw,
            charge: 0.0,
            auto_cast: false,
            requested: false,
        }
    }

    pub fn with_auto_cast(mut self) -> Self {
        self.auto_cast = true;
        self
    }

    /// Ask for a cast with `charge`; served on the next frame the cooldown allows.
    pub fn request_cast(&mut self, charge: f32) {
        self.charge = charge.clamp(0.0, 1.0);
        self.requested = true;
    }

    pub fn wants_cast(&self) -> bool {
        self.requested || self.auto_cast
    }

    /// Consume a pending request after a cast went out.
    pub fn clear_request(&mut self) {
        self.requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_throw_normalizes_and_pushes() {
        let mut ball = Windball::new(10.0, 1.0);
        ball.throw((0.0, 2.0), 20.0, 0.5);
        assert_eq!(ball.state, WindballState::Pushing);
        assert!(approx_eq(ball.direction.1, 1.0));
        assert!(ball.is_live());
    }

    #[test]
    fn test_zero_direction_hovers_in_place() {
        let mut ball = Windball::new(10.0, 1.0);
        ball.throw((0.0, 0.0), 20.0, 1.0);
        assert_eq!(ball.state, WindballState::Hovering);
        assert_eq!(ball.step(1.0), (0.0, 0.0));
    }

    #[test]
    fn test_drag_slows_down_to_hover() {
        let mut ball = Windball::new(8.0, 2.0);
        ball.throw((1.0, 0.0), 6.0, 0.0);
        let (dx, _) = ball.step(0.25);
        assert!(approx_eq(dx, 1.5));
        assert!(approx_eq(ball.speed, 4.0));
        assert_eq!(ball.state, WindballState::Pushing);

        ball.step(0.25);
        assert_eq!(ball.state, WindballState::Hovering);
        assert_eq!(ball.step(0.25), (0.0, 0.0));
    }

    #[test]
    fn test_reset_goes_idle() {
        let mut ball = Windball::new(1.0, 0.5);
        ball.throw((1.0, 0.0), 3.0, 1.0);
        ball.reset();
        assert!(!ball.is_live());
        assert_eq!(ball.step(1.0), (0.0, 0.0));
    }

    #[test]
    fn test_throw_speed_follows_charge() {
        let range = ThrowRange {
            min_speed: 100.0,
            max_speed: 200.0,
        };
        assert!(approx_eq(range.speed_for(0.0), 100.0));
        assert!(approx_eq(range.speed_for(0.5), 150.0));
        assert!(approx_eq(range.speed_for(4.0), 200.0));
    }

    #[test]
    fn test_caster_requests() {
        let range = ThrowRange {
            min_speed: 1.0,
            max_speed: 2.0,
        };
        let mut caster = WindballCaster::new(PoolCategory::Windball, (1.0, 0.0), range);
        assert!(!caster.wants_cast());
        caster.request_cast(2.0);
        assert!(caster.wants_cast());
        assert!(approx_eq(caster.charge, 1.0));
        caster.clear_request();
        assert!(!caster.wants_cast());
        assert!(caster.with_auto_cast().wants_cast());
    }
}
