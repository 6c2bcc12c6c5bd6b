//! Contact events.
//!
//! Collision detection is outside this crate. Whatever detects contacts (a
//! physics step, a test, a scripted sequence) reports them by triggering a
//! [`CollisionEvent`]. Hazards such as
//! [`RegenerateOnTimer`](crate::components::regenerate::RegenerateOnTimer)
//! observe it to know when they were touched.
use bevy_ecs::prelude::*;

/// Event fired when two entities touch.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    /// Both participants, or only `a` when an entity reports touching itself.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + use<> {
        let b = (self.b != self.a).then_some(self.b);
        std::iter::once(self.a).chain(b)
    }
}
