//! Pool release observer.
//!
//! Routes [`PoolReleaseEvent`]s to the [`ObjectPool`] resource so pooled
//! entities never need to borrow the pool themselves.

use bevy_ecs::prelude::*;

use crate::events::pool::PoolReleaseEvent;
use crate::resources::objectpool::ObjectPool;

/// Deactivate the released entity and optionally promote it to the front of its pool.
pub fn pool_release_observer(
    trigger: On<PoolReleaseEvent>,
    mut pool: ResMut<ObjectPool>,
    mut commands: Commands,
) {
    let event = trigger.event();
    pool.release(
        &mut commands,
        event.category,
        event.entity,
        event.move_to_front,
    );
}
