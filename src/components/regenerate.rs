//! Platform or hazard that vanishes after being touched and comes back later.
//!
//! [`RegenerateOnTimer`] reuses the single [`Timer`](crate::components::timer::Timer)
//! on its entity for both phases: first it counts `time_to_disappear`, then it
//! is re-armed with `time_to_regen` and restarted on the following frame
//! through the [`TickScheduler`](crate::resources::tickscheduler::TickScheduler).
//!
//! # Phases
//!
//! ```text
//! Solid ──touched──> Disappearing ──timer──> Gone ──timer (next frame)──> Solid
//! ```
//!
//! Each transition into `Gone` or back into `Solid` emits a
//! [`RegenerateEvent`](crate::events::regenerate::RegenerateEvent).

use bevy_ecs::prelude::Component;

use crate::components::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenPhase {
    /// Present and waiting to be touched.
    #[default]
    Solid,
    /// Touched, counting down to disappearing.
    Disappearing,
    /// Not present, counting down to regeneration.
    Gone,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RegenerateOnTimer {
    /// Seconds between being touched and disappearing.
    pub time_to_disappear: f32,
    /// Seconds spent gone before coming back.
    pub time_to_regen: f32,
    pub phase: RegenPhase,
}

impl RegenerateOnTimer {
    pub fn new(time_to_disappear: f32, time_to_regen: f32) -> Self {
        RegenerateOnTimer {
            time_to_disappear,
            time_to_regen,
            phase: RegenPhase::Solid,
        }
    }

    /// Start the disappear countdown on `timer`.
    ///
    /// Only a solid entity with an idle timer reacts; returns whether the
    /// countdown was started.
    pub fn trigger(&mut self, timer: &mut Timer) -> bool {
        if self.phase != RegenPhase::Solid || !timer.is_done() {
            return false;
        }
        timer.set_timer(self.time_to_disappear);
        timer.start();
        self.phase = RegenPhase::Disappearing;
        true
    }

    /// `false` only while gone.
    pub fn is_present(&self) -> bool {
        self.phase != RegenPhase::Gone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_arms_disappear_timer() {
        let mut regen = RegenerateOnTimer::new(0.5, 2.0);
        let mut timer = Timer::new(0.0);
        assert!(regen.trigger(&mut timer));
        assert_eq!(regen.phase, RegenPhase::Disappearing);
        assert!(timer.is_running());
        assert_eq!(timer.target_time(), 0.5);
    }

    #[test]
    fn test_trigger_ignored_unless_solid() {
        let mut regen = RegenerateOnTimer::new(0.5, 2.0);
        let mut timer = Timer::new(0.5);
        regen.trigger(&mut timer);
        assert!(!regen.trigger(&mut timer));

        regen.phase = RegenPhase::Gone;
        let mut idle = Timer::new(0.5);
        assert!(!regen.trigger(&mut idle));
        assert!(!regen.is_present());
    }
}
