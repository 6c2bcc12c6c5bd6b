//! Fixed-capacity object pools.
//!
//! The [`ObjectPool`] resource keeps, per [`PoolCategory`], a circular queue of
//! entities built once at startup. Spawning takes the front entity, activates
//! it, places it and puts it at the back of the queue. Nothing is allocated or
//! despawned after [`ObjectPool::initialize`]; inactive members simply carry
//! the [`Disabled`] marker, which hides them from regular queries.
//!
//! # Pool kinds
//!
//! - **Plain pools** recycle in strict FIFO order. An entity comes back only
//!   after every other member of its pool has been spawned once.
//! - **Getter pools** return a [`PoolHandle`] and track each member's queue
//!   index (0 = front). A member that finished early can ask to be moved to the
//!   front with [`ObjectPool::request_move_to_front`] so it is reused next.
//!
//! A category belongs to exactly one pool of one kind.
//!
//! # Activation
//!
//! The pool only does bookkeeping. Toggling entities goes through the
//! [`PoolTarget`] trait, implemented for [`World`] (setup code, tests) and
//! [`Commands`] (systems and observers).
//!
//! # Example
//!
//! ```ignore
//! fn fire(mut pool: ResMut<ObjectPool>, mut commands: Commands) {
//!     if let Some(handle) = pool.spawn_from_getter_pool(
//!         &mut commands,
//!         PoolCategory::ShootingObject,
//!         MapPosition::new(0.0, 0.0),
//!         Rotation::default(),
//!     ) {
//!         // handle.capability tells what the entity is guaranteed to carry
//!     }
//! }
//! ```

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::components::mapposition::MapPosition;
use crate::components::pooled::Pooled;
use crate::components::rotation::Rotation;
use crate::resources::poolconfig::{PoolCapability, PoolConfig, PoolConfigError, PrototypeStore};

/// Key identifying which pool a request targets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoolCategory {
    TestCube,
    Windball,
    ShootingObject,
}

impl fmt::Display for PoolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolCategory::TestCube => write!(f, "TestCube"),
            PoolCategory::Windball => write!(f, "Windball"),
            PoolCategory::ShootingObject => write!(f, "ShootingObject"),
        }
    }
}

/// Where pooled entities get switched on and off.
pub trait PoolTarget {
    /// Make `entity` active and place it.
    fn activate(&mut self, entity: Entity, position: MapPosition, rotation: Rotation);
    /// Make `entity` inactive. Its components are left untouched.
    fn deactivate(&mut self, entity: Entity);
}

impl PoolTarget for World {
    fn activate(&mut self, entity: Entity, position: MapPosition, rotation: Rotation) {
        match self.get_entity_mut(entity) {
            Ok(mut entity_mut) => {
                entity_mut.remove::<Disabled>();
                entity_mut.insert((position, rotation));
            }
            Err(_) => warn!("Pooled entity {:?} no longer exists", entity),
        }
    }

    fn deactivate(&mut self, entity: Entity) {
        if let Ok(mut entity_mut) = self.get_entity_mut(entity) {
            entity_mut.insert(Disabled);
        }
    }
}

impl PoolTarget for Commands<'_, '_> {
    fn activate(&mut self, entity: Entity, position: MapPosition, rotation: Rotation) {
        match self.get_entity(entity) {
            Ok(mut entity_commands) => {
                entity_commands
                    .remove::<Disabled>()
                    .insert((position, rotation));
            }
            Err(_) => warn!("Pooled entity {:?} no longer exists", entity),
        }
    }

    fn deactivate(&mut self, entity: Entity) {
        if let Ok(mut entity_commands) = self.get_entity(entity) {
            entity_commands.insert(Disabled);
        }
    }
}

/// One queue position of a getter pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetterSlot {
    pub entity: Entity,
    /// Distance from the front of the queue; renumbered after every reorder.
    pub index: usize,
}

/// What a getter pool hands out instead of a bare entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolHandle {
    pub entity: Entity,
    pub category: PoolCategory,
    /// Guaranteed to be provided by `entity`.
    pub capability: PoolCapability,
}

#[derive(Debug, Clone)]
struct GetterPool {
    capability: PoolCapability,
    queue: VecDeque<GetterSlot>,
}

impl GetterPool {
    fn renumber(&mut self) {
        for (index, slot) in self.queue.iter_mut().enumerate() {
            slot.index = index;
        }
    }

    fn position_of(&self, entity: Entity) -> Option<usize> {
        self.queue.iter().position(|slot| slot.entity == entity)
    }
}

/// All object pools, keyed by category.
#[derive(Resource, Debug, Default)]
pub struct ObjectPool {
    pools: FxHashMap<PoolCategory, VecDeque<Entity>>,
    getter_pools: FxHashMap<PoolCategory, GetterPool>,
}

impl ObjectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured pool: plain pools first, then getter pools.
    ///
    /// Each category gets exactly `size` instances, created by its prototype
    /// factory, marked [`Disabled`] and [`Pooled`], and queued in creation order.
    /// Misconfigured categories are logged and skipped; the returned list holds
    /// every problem found. Valid categories are built regardless.
    pub fn initialize(
        &mut self,
        world: &mut World,
        config: &PoolConfig,
        prototypes: &PrototypeStore,
    ) -> Vec<PoolConfigError> {
        let mut errors = Vec::new();

        for entry in &config.pools {
            if self.contains_category(entry.category) {
                errors.push(PoolConfigError::DuplicateCategory(entry.category));
                continue;
            }
            match create_instances(world, entry.category, &entry.prototype, entry.size, prototypes)
            {
                Ok(instances) => {
                    info!("Pool {} ready with {} objects", entry.category, instances.len());
                    self.pools
                        .insert(entry.category, instances.into_iter().collect());
                }
                Err(err) => errors.push(err),
            }
        }

        for entry in &config.getter_pools {
            if self.contains_category(entry.category) {
                errors.push(PoolConfigError::DuplicateCategory(entry.category));
                continue;
            }
            let instances = match create_instances(
                world,
                entry.category,
                &entry.prototype,
                entry.size,
                prototypes,
            ) {
                Ok(instances) => instances,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };

            let capable = instances
                .iter()
                .all(|entity| entry.capability.is_satisfied_by(world, *entity));
            if !capable {
                for entity in instances {
                    world.despawn(entity);
                }
                errors.push(PoolConfigError::MissingCapability {
                    category: entry.category,
                    capability: entry.capability,
                });
                continue;
            }

            info!(
                "Getter pool {} ready with {} objects",
                entry.category,
                instances.len()
            );
            let mut pool = GetterPool {
                capability: entry.capability,
                queue: instances
                    .into_iter()
                    .map(|entity| GetterSlot { entity, index: 0 })
                    .collect(),
            };
            pool.renumber();
            self.getter_pools.insert(entry.category, pool);
        }

        for err in &errors {
            error!("{}", err);
        }
        errors
    }

    /// Activate the front entity of a plain pool at `position` and send it to the back.
    ///
    /// Returns `None` and logs a warning if `category` is not a plain pool.
    pub fn spawn_from_pool(
        &mut self,
        target: &mut impl PoolTarget,
        category: PoolCategory,
        position: MapPosition,
        rotation: Rotation,
    ) -> Option<Entity> {
        let Some(queue) = self.pools.get_mut(&category) else {
            warn!(
                "Object requested not in selected pool (plain pool), category: {}",
                category
            );
            return None;
        };
        let entity = queue.pop_front()?;
        target.activate(entity, position, rotation);
        queue.push_back(entity);
        Some(entity)
    }

    /// Getter-pool version of [`ObjectPool::spawn_from_pool`].
    ///
    /// After rotating the queue every slot is renumbered `0..N` front to back.
    pub fn spawn_from_getter_pool(
        &mut self,
        target: &mut impl PoolTarget,
        category: PoolCategory,
        position: MapPosition,
        rotation: Rotation,
    ) -> Option<PoolHandle> {
        let Some(pool) = self.getter_pools.get_mut(&category) else {
            warn!(
                "Object requested not in selected pool (getter pool), category: {}",
                category
            );
            return None;
        };
        let slot = pool.queue.pop_front()?;
        target.activate(slot.entity, position, rotation);
        pool.queue.push_back(slot);
        pool.renumber();
        Some(PoolHandle {
            entity: slot.entity,
            category,
            capability: pool.capability,
        })
    }

    /// Move `entity` to the front of its getter pool so it is spawned next.
    ///
    /// The entity's current index is looked up at call time, so repeated
    /// requests between spawns never act on a stale index. Rotates exactly
    /// `index` front entries to the back. Returns `false` (no-op) when the
    /// entity is already at the front, is not a member, or `category` is not a
    /// getter pool.
    pub fn request_move_to_front(&mut self, category: PoolCategory, entity: Entity) -> bool {
        let Some(pool) = self.getter_pools.get_mut(&category) else {
            debug!("Move to front ignored, {} is not a getter pool", category);
            return false;
        };
        let Some(index) = pool.position_of(entity) else {
            debug!("Move to front ignored, {:?} is not in pool {}", entity, category);
            return false;
        };
        if index == 0 {
            return false;
        }
        pool.queue.rotate_left(index);
        pool.renumber();
        true
    }

    /// Deactivate `entity` and optionally promote it to the front of its getter pool.
    pub fn release(
        &mut self,
        target: &mut impl PoolTarget,
        category: PoolCategory,
        entity: Entity,
        move_to_front: bool,
    ) {
        if !self.is_member(category, entity) {
            warn!(
                "Release ignored, {:?} is not a member of pool {}",
                entity, category
            );
            return;
        }
        target.deactivate(entity);
        if move_to_front {
            self.request_move_to_front(category, entity);
        }
    }

    /// Deactivate every pooled entity. Queue order is kept and all of them stay spawnable.
    pub fn despawn_all(&mut self, target: &mut impl PoolTarget) {
        for queue in self.pools.values() {
            for entity in queue {
                target.deactivate(*entity);
            }
        }
        for pool in self.getter_pools.values() {
            for slot in &pool.queue {
                target.deactivate(slot.entity);
            }
        }
    }

    /// Deactivate every entity of one pool, of either kind.
    pub fn despawn_all_in_category(&mut self, target: &mut impl PoolTarget, category: PoolCategory) {
        if let Some(queue) = self.pools.get(&category) {
            for entity in queue {
                target.deactivate(*entity);
            }
        } else if let Some(pool) = self.getter_pools.get(&category) {
            for slot in &pool.queue {
                target.deactivate(slot.entity);
            }
        } else {
            warn!(
                "Pool requested is not part of pool dictionary, category: {}",
                category
            );
        }
    }

    /// Current queue index of a getter-pool member (0 = next to spawn).
    pub fn index_of(&self, category: PoolCategory, entity: Entity) -> Option<usize> {
        self.getter_pools
            .get(&category)?
            .queue
            .iter()
            .find(|slot| slot.entity == entity)
            .map(|slot| slot.index)
    }

    /// Slots of a getter pool, front to back.
    pub fn getter_slots(&self, category: PoolCategory) -> Option<impl Iterator<Item = &GetterSlot>> {
        self.getter_pools.get(&category).map(|pool| pool.queue.iter())
    }

    /// Entities of any pool, front (next to spawn) to back.
    pub fn queue_order(&self, category: PoolCategory) -> Option<Vec<Entity>> {
        if let Some(queue) = self.pools.get(&category) {
            return Some(queue.iter().copied().collect());
        }
        self.getter_pools
            .get(&category)
            .map(|pool| pool.queue.iter().map(|slot| slot.entity).collect())
    }

    /// Number of entities in a pool.
    pub fn len(&self, category: PoolCategory) -> Option<usize> {
        if let Some(queue) = self.pools.get(&category) {
            return Some(queue.len());
        }
        self.getter_pools.get(&category).map(|pool| pool.queue.len())
    }

    pub fn contains_category(&self, category: PoolCategory) -> bool {
        self.pools.contains_key(&category) || self.getter_pools.contains_key(&category)
    }

    pub fn is_getter_pool(&self, category: PoolCategory) -> bool {
        self.getter_pools.contains_key(&category)
    }

    fn is_member(&self, category: PoolCategory, entity: Entity) -> bool {
        if let Some(queue) = self.pools.get(&category) {
            return queue.contains(&entity);
        }
        self.getter_pools
            .get(&category)
            .is_some_and(|pool| pool.position_of(entity).is_some())
    }
}

fn create_instances(
    world: &mut World,
    category: PoolCategory,
    prototype: &str,
    size: usize,
    prototypes: &PrototypeStore,
) -> Result<Vec<Entity>, PoolConfigError> {
    if size == 0 {
        return Err(PoolConfigError::EmptyPool(category));
    }
    let Some(factory) = prototypes.get(prototype) else {
        return Err(PoolConfigError::UnknownPrototype {
            category,
            prototype: prototype.to_string(),
        });
    };

    let mut instances = Vec::with_capacity(size);
    for serial in 0..size {
        let entity = factory(world);
        match world.get_entity_mut(entity) {
            Ok(mut entity_mut) => {
                entity_mut.insert((Disabled, Pooled::new(category, serial)));
                instances.push(entity);
            }
            Err(_) => {
                for entity in instances {
                    world.despawn(entity);
                }
                return Err(PoolConfigError::UnknownPrototype {
                    category,
                    prototype: prototype.to_string(),
                });
            }
        }
    }
    Ok(instances)
}
