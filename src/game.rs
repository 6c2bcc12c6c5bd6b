//! Simulation setup and per-frame schedule.
//!
//! [`setup`] fills a fresh [`World`] with the runtime resources, builds the
//! object pools from the configured pool table, registers the observers and
//! places the level's hazards. [`build_schedule`] returns the systems to run
//! once per frame.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::cooldown::AbilityCooldown;
use crate::components::lineshooter::LineShooter;
use crate::components::mapposition::MapPosition;
use crate::components::randomspawnline::RandomSpawnLine;
use crate::components::regenerate::RegenerateOnTimer;
use crate::components::rotation::Rotation;
use crate::components::shootingobject::ShootingObject;
use crate::components::timer::Timer;
use crate::components::windball::{ThrowRange, Windball, WindballCaster};
use crate::events::regenerate::RegenerateEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::objectpool::{ObjectPool, PoolCategory};
use crate::resources::poolconfig::{PoolCapability, PoolConfig, PoolConfigError, PrototypeStore};
use crate::resources::tickscheduler::TickScheduler;
use crate::resources::worldtime::WorldTime;
use crate::systems::cooldown::ability_cooldown_system;
use crate::systems::lineshooter::{line_shooter_observer, line_shooter_start_system};
use crate::systems::pool::pool_release_observer;
use crate::systems::randomspawnline::{random_spawn_line_observer, random_spawn_line_start_system};
use crate::systems::regenerate::{regenerate_timer_observer, regenerate_touch_observer};
use crate::systems::shootingobject::{shooting_object_collision_observer, shooting_object_system};
use crate::systems::timer::{apply_deferred_timer_ops, update_timers};
use crate::systems::windball::{windball_cast_system, windball_collision_observer, windball_system};

pub const TEST_CUBE_PROTOTYPE: &str = "test_cube";
pub const WINDBALL_PROTOTYPE: &str = "windball";
pub const SHOOTING_OBJECT_PROTOTYPE: &str = "shooting_object";

const WINDBALL_DRAG: f32 = 240.0;
const WINDBALL_HOVER_SPEED: f32 = 30.0;
const WINDBALL_COOLDOWN: f32 = 1.5;
const WINDBALL_THROW: ThrowRange = ThrowRange {
    min_speed: 150.0,
    max_speed: 300.0,
};
const REGEN_WINDBALL_TIME_TO_DISAPPEAR: f32 = 0.25;
const REGEN_WINDBALL_TIME_TO_REGEN: f32 = 2.0;

pub fn test_cube_prototype(world: &mut World) -> Entity {
    world
        .spawn((MapPosition::default(), Rotation::default()))
        .id()
}

pub fn windball_prototype(world: &mut World) -> Entity {
    world
        .spawn((
            MapPosition::default(),
            Rotation::default(),
            Windball::new(WINDBALL_DRAG, WINDBALL_HOVER_SPEED),
        ))
        .id()
}

pub fn shooting_object_prototype(world: &mut World) -> Entity {
    world
        .spawn((
            MapPosition::default(),
            Rotation::default(),
            ShootingObject::new(0.0),
        ))
        .id()
}

/// Every prototype the level knows how to build.
pub fn default_prototypes() -> PrototypeStore {
    PrototypeStore::new()
        .with(TEST_CUBE_PROTOTYPE, test_cube_prototype)
        .with(WINDBALL_PROTOTYPE, windball_prototype)
        .with(SHOOTING_OBJECT_PROTOTYPE, shooting_object_prototype)
}

/// Pool table used when no pool file can be read.
pub fn default_pool_config() -> PoolConfig {
    PoolConfig::default()
        .with_pool(PoolCategory::TestCube, TEST_CUBE_PROTOTYPE, 4)
        .with_getter_pool(
            PoolCategory::Windball,
            WINDBALL_PROTOTYPE,
            6,
            PoolCapability::Windball,
        )
        .with_getter_pool(
            PoolCategory::ShootingObject,
            SHOOTING_OBJECT_PROTOTYPE,
            8,
            PoolCapability::ShootingObject,
        )
}

/// Register every gameplay observer. Call once per world.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(pool_release_observer));
    world.spawn(Observer::new(line_shooter_observer));
    world.spawn(Observer::new(random_spawn_line_observer));
    world.spawn(Observer::new(regenerate_timer_observer));
    world.spawn(Observer::new(regenerate_touch_observer));
    world.spawn(Observer::new(shooting_object_collision_observer));
    world.spawn(Observer::new(windball_collision_observer));
    world.spawn(Observer::new(log_regenerate_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();
}

/// Insert runtime resources, build pools and observers, and place the level.
///
/// Returns the pool configuration problems found; the affected categories
/// are missing from the pool but everything else is usable.
pub fn setup(world: &mut World, config: &GameConfig) -> Vec<PoolConfigError> {
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(TickScheduler::new());
    world.insert_resource(config.clone());

    let pool_config = match config.pool_config_path.to_str() {
        Some(path) => PoolConfig::load_from_file(path).unwrap_or_else(|e| {
            warn!(
                "Failed to load pool table {:?}: {}. Using built-in pools",
                config.pool_config_path, e
            );
            default_pool_config()
        }),
        None => default_pool_config(),
    };

    let mut pool = ObjectPool::new();
    let errors = pool.initialize(world, &pool_config, &default_prototypes());
    world.insert_resource(pool);

    register_observers(world);
    spawn_level(world);
    errors
}

/// Place the hazards and the windball caster.
pub fn spawn_level(world: &mut World) {
    world.spawn((
        MapPosition::new(0.0, 64.0),
        Timer::new(0.75),
        LineShooter::new(PoolCategory::ShootingObject, (1.0, 0.0), 240.0, 180.0),
    ));
    world.spawn((
        MapPosition::new(320.0, 0.0),
        Timer::new(1.25),
        LineShooter::new(PoolCategory::ShootingObject, (-1.0, 1.0), 160.0, 120.0),
    ));
    world.spawn((
        Timer::new(2.0),
        RandomSpawnLine::new(
            PoolCategory::TestCube,
            MapPosition::new(0.0, -32.0),
            MapPosition::new(320.0, -32.0),
        ),
    ));
    for x in [96.0, 224.0] {
        world.spawn((
            MapPosition::new(x, 160.0),
            Timer::new(REGEN_WINDBALL_TIME_TO_DISAPPEAR),
            RegenerateOnTimer::new(REGEN_WINDBALL_TIME_TO_DISAPPEAR, REGEN_WINDBALL_TIME_TO_REGEN),
        ));
    }
    world.spawn((
        MapPosition::new(160.0, 200.0),
        AbilityCooldown::new(WINDBALL_COOLDOWN),
        WindballCaster::new(PoolCategory::Windball, (16.0, 0.0), WINDBALL_THROW).with_auto_cast(),
    ));
}

/// Systems run once per frame, after [`update_world_time`](crate::systems::time::update_world_time).
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((apply_deferred_timer_ops, update_timers).chain());
    // Start systems run before ticking so newly placed hazards count their first frame
    update.add_systems(line_shooter_start_system.before(update_timers));
    update.add_systems(random_spawn_line_start_system.before(update_timers));
    update.add_systems(shooting_object_system.after(update_timers));
    update.add_systems(ability_cooldown_system);
    update.add_systems(windball_cast_system.after(ability_cooldown_system));
    update.add_systems(windball_system.after(windball_cast_system));
    update
}

fn log_regenerate_observer(trigger: On<RegenerateEvent>) {
    let event = trigger.event();
    info!("{:?} {:?}", event.entity, event.kind);
}

/// Return every pooled entity to its pool.
pub fn despawn_all_pooled(world: &mut World) {
    world.resource_scope(|world, mut pool: Mut<ObjectPool>| {
        pool.despawn_all(world);
    });
}
