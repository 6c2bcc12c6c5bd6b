//! Timer completion events.
//!
//! Whenever a [`Timer`](crate::components::timer::Timer) attached to an entity
//! completes (one-shot completion or one loop cycle), the
//! [`update_timers`](crate::systems::timer::update_timers) system triggers a
//! [`TimerEvent`] for that entity. Observers get full world access, which the
//! timer's own pending action does not, so this is the place to re-arm the
//! timer, change state, or spawn.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TimerEvent>, mut timers: Query<&mut Timer>| {
//!     if let Ok(mut timer) = timers.get_mut(trigger.entity) {
//!         timer.set_timer(3.0);
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::timer::Timer`] – the timer component
//! - [`crate::systems::timer::update_timers`] – the system that emits these events

use bevy_ecs::prelude::*;

/// Event emitted when an entity's timer completes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer completed.
    pub entity: Entity,
}
