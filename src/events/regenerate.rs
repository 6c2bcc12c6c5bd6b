//! Regeneration notifications.
//!
//! Triggered by the [`regenerate`](crate::systems::regenerate) observers each
//! time a [`RegenerateOnTimer`](crate::components::regenerate::RegenerateOnTimer)
//! entity vanishes or comes back. Listeners use them to toggle colliders,
//! visuals or sounds.

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateKind {
    Disappeared,
    Regenerated,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerateEvent {
    pub entity: Entity,
    pub kind: RegenerateKind,
}
