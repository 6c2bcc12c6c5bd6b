//! Object pool configuration.
//!
//! Pools are described by a JSON table that names, per category, the
//! prototype used to build instances and how many to build. Getter pools also
//! name the [`PoolCapability`] every instance must provide; it is checked once
//! when the pool is built, so spawn calls never probe components.
//!
//! Prototypes are plain functions registered by name in a [`PrototypeStore`].
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "pools": [
//!     { "category": "TestCube", "prototype": "test_cube", "size": 8 }
//!   ],
//!   "getter_pools": [
//!     { "category": "ShootingObject", "prototype": "shooting_object",
//!       "size": 6, "capability": "ShootingObject" }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::shootingobject::ShootingObject;
use crate::components::windball::Windball;
use crate::resources::objectpool::PoolCategory;

/// Builds one inactive-to-be instance of a prototype and returns its entity.
pub type PrototypeFactory = fn(&mut World) -> Entity;

/// What every instance of a getter pool is guaranteed to carry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolCapability {
    /// Instances have a [`ShootingObject`] component.
    ShootingObject,
    /// Instances have a [`Windball`] component.
    Windball,
}

impl PoolCapability {
    /// Returns `true` if `entity` provides this capability.
    pub fn is_satisfied_by(self, world: &World, entity: Entity) -> bool {
        match self {
            PoolCapability::ShootingObject => world.get::<ShootingObject>(entity).is_some(),
            PoolCapability::Windball => world.get::<Windball>(entity).is_some(),
        }
    }
}

impl fmt::Display for PoolCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolCapability::ShootingObject => write!(f, "ShootingObject"),
            PoolCapability::Windball => write!(f, "Windball"),
        }
    }
}

/// A plain pool: recycled in strict FIFO order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PoolEntry {
    pub category: PoolCategory,
    pub prototype: String,
    pub size: usize,
}

/// A getter pool: recycled through [`PoolHandle`](crate::resources::objectpool::PoolHandle)s
/// with trackable queue index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetterPoolEntry {
    pub category: PoolCategory,
    pub prototype: String,
    pub size: usize,
    pub capability: PoolCapability,
}

/// Full pool table, usually loaded from `assets/pools.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PoolConfig {
    #[serde(default)]
    pub pools: Vec<PoolEntry>,
    #[serde(default)]
    pub getter_pools: Vec<GetterPoolEntry>,
}

impl PoolConfig {
    /// Loads the pool table from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let config: PoolConfig = serde_json::from_str(&file_content)?;
        Ok(config)
    }

    pub fn with_pool(
        mut self,
        category: PoolCategory,
        prototype: impl Into<String>,
        size: usize,
    ) -> Self {
        self.pools.push(PoolEntry {
            category,
            prototype: prototype.into(),
            size,
        });
        self
    }

    pub fn with_getter_pool(
        mut self,
        category: PoolCategory,
        prototype: impl Into<String>,
        size: usize,
        capability: PoolCapability,
    ) -> Self {
        self.getter_pools.push(GetterPoolEntry {
            category,
            prototype: prototype.into(),
            size,
            capability,
        });
        self
    }
}

/// Map of prototype names to factories.
#[derive(Default)]
pub struct PrototypeStore {
    pub map: FxHashMap<String, PrototypeFactory>,
}

impl PrototypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a name used by the pool table.
    pub fn insert(&mut self, name: impl Into<String>, factory: PrototypeFactory) {
        self.map.insert(name.into(), factory);
    }

    pub fn with(mut self, name: impl Into<String>, factory: PrototypeFactory) -> Self {
        self.insert(name, factory);
        self
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<PrototypeFactory> {
        self.map.get(name.as_ref()).copied()
    }
}

/// Problems found while building pools. The offending category is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolConfigError {
    /// Category already used by another pool of either kind.
    DuplicateCategory(PoolCategory),
    /// No factory registered under the prototype name.
    UnknownPrototype {
        category: PoolCategory,
        prototype: String,
    },
    /// Size of zero.
    EmptyPool(PoolCategory),
    /// A getter-pool instance lacks the declared capability.
    MissingCapability {
        category: PoolCategory,
        capability: PoolCapability,
    },
}

impl fmt::Display for PoolConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolConfigError::DuplicateCategory(category) => write!(
                f,
                "Objects can only be in one pool, category {} is configured twice",
                category
            ),
            PoolConfigError::UnknownPrototype {
                category,
                prototype,
            } => write!(
                f,
                "Unknown prototype '{}' for pool {}",
                prototype, category
            ),
            PoolConfigError::EmptyPool(category) => {
                write!(f, "Pool {} must hold at least one object", category)
            }
            PoolConfigError::MissingCapability {
                category,
                capability,
            } => write!(
                f,
                "Pool getter {} not found on prototype instances of pool {}",
                capability, category
            ),
        }
    }
}

impl std::error::Error for PoolConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_empty(world: &mut World) -> Entity {
        world.spawn_empty().id()
    }

    fn spawn_shooting(world: &mut World) -> Entity {
        world.spawn(ShootingObject::new(1.0)).id()
    }

    #[test]
    fn test_parse_pool_table() {
        let json = r#"{
            "pools": [ { "category": "TestCube", "prototype": "cube", "size": 4 } ],
            "getter_pools": [
                { "category": "ShootingObject", "prototype": "shot", "size": 3,
                  "capability": "ShootingObject" }
            ]
        }"#;
        let config: PoolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            PoolConfig::default()
                .with_pool(PoolCategory::TestCube, "cube", 4)
                .with_getter_pool(
                    PoolCategory::ShootingObject,
                    "shot",
                    3,
                    PoolCapability::ShootingObject
                )
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: PoolConfig = serde_json::from_str("{}").unwrap();
        assert!(config.pools.is_empty());
        assert!(config.getter_pools.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{ "pools": [ { "category": "Dragon", "prototype": "x", "size": 1 } ] }"#;
        assert!(serde_json::from_str::<PoolConfig>(json).is_err());
    }

    #[test]
    fn test_prototype_store_lookup() {
        let store = PrototypeStore::new().with("empty", spawn_empty);
        assert!(store.get("empty").is_some());
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_capability_check() {
        let mut world = World::new();
        let plain = spawn_empty(&mut world);
        let shot = spawn_shooting(&mut world);
        assert!(!PoolCapability::ShootingObject.is_satisfied_by(&world, plain));
        assert!(PoolCapability::ShootingObject.is_satisfied_by(&world, shot));
        assert!(!PoolCapability::Windball.is_satisfied_by(&world, shot));
    }

    #[test]
    fn test_error_messages_name_the_category() {
        let err = PoolConfigError::DuplicateCategory(PoolCategory::Windball);
        assert!(err.to_string().contains("Windball"));
        let err = PoolConfigError::UnknownPrototype {
            category: PoolCategory::TestCube,
            prototype: "nope".into(),
        };
        assert!(err.to_string().contains("nope"));
    }
}
