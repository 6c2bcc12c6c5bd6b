//! Pool membership marker.
//!
//! Every entity created by [`ObjectPool::initialize`](crate::resources::objectpool::ObjectPool::initialize)
//! carries a [`Pooled`] component. It records which category the entity
//! belongs to, so the entity can hand itself back to the right pool (see
//! [`PoolReleaseEvent`](crate::events::pool::PoolReleaseEvent)), and its
//! creation serial for debugging (`"ShootingObject #3"`).
//!
//! Pool members are never despawned by gameplay code. They are toggled with
//! [`Disabled`](bevy_ecs::entity_disabling::Disabled) instead.

use bevy_ecs::prelude::Component;
use std::fmt;

use crate::resources::objectpool::PoolCategory;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pooled {
    /// Pool the entity belongs to.
    pub category: PoolCategory,
    /// Creation order within the pool, starting at 0.
    pub serial: usize,
}

impl Pooled {
    pub fn new(category: PoolCategory, serial: usize) -> Self {
        Pooled { category, serial }
    }
}

impl fmt::Display for Pooled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.category, self.serial)
    }
}
