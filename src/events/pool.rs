//! Pool release events.
//!
//! Pooled entities hand themselves back with a [`PoolReleaseEvent`] instead of
//! reaching for the [`ObjectPool`](crate::resources::objectpool::ObjectPool)
//! resource directly. The
//! [`pool_release_observer`](crate::systems::pool::pool_release_observer)
//! deactivates the entity and, when asked, promotes it to the front of its
//! getter pool so it is the next one spawned.

use bevy_ecs::prelude::*;

use crate::resources::objectpool::PoolCategory;

/// Request to deactivate a pooled entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReleaseEvent {
    pub entity: Entity,
    pub category: PoolCategory,
    /// Reuse this entity before any other (getter pools only).
    pub move_to_front: bool,
}
