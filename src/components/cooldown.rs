//! Ability cooldown gate.
//!
//! [`AbilityCooldown`] wraps its own [`Timer`] so an entity can carry a
//! cooldown next to other timers. Ticked by
//! [`ability_cooldown_system`](crate::systems::cooldown::ability_cooldown_system).

use bevy_ecs::prelude::Component;

use crate::components::timer::Timer;

#[derive(Component, Debug)]
pub struct AbilityCooldown {
    pub timer: Timer,
}

impl AbilityCooldown {
    pub fn new(seconds: f32) -> Self {
        AbilityCooldown {
            timer: Timer::new(seconds),
        }
    }

    /// Use the ability if it is ready. Starts the cooldown on success.
    pub fn try_use(&mut self) -> bool {
        if self.is_on_cooldown() {
            return false;
        }
        self.timer.start();
        true
    }

    pub fn is_on_cooldown(&self) -> bool {
        !self.timer.is_done()
    }

    /// Fraction of the cooldown still to wait, `0.0` when ready.
    pub fn remaining_fraction(&self) -> f32 {
        if self.is_on_cooldown() {
            1.0 - self.timer.normalized()
        } else {
            0.0
        }
    }
}
