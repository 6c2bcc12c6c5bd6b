//! Line shooter systems.
//!
//! - [`line_shooter_start_system`] – arms newly added shooters and fires their first shot
//! - [`line_shooter_observer`] – fires one more shot on every timer loop
//!
//! Projectiles come from the shooter's getter pool; see
//! [`crate::systems::shootingobject`] for how they travel and come back.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::lineshooter::LineShooter;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::shootingobject::ShootingObject;
use crate::components::timer::Timer;
use crate::events::pool::PoolReleaseEvent;
use crate::events::timer::TimerEvent;
use crate::resources::objectpool::ObjectPool;
use crate::resources::poolconfig::PoolCapability;

/// Start the looping shot timer of every new [`LineShooter`] and shoot once right away.
pub fn line_shooter_start_system(
    mut pool: ResMut<ObjectPool>,
    mut shooters: Query<(&LineShooter, &MapPosition, &mut Timer), Added<LineShooter>>,
    mut commands: Commands,
) {
    for (shooter, position, mut timer) in shooters.iter_mut() {
        timer.start_loop();
        fire_line_shot(&mut pool, &mut commands, shooter, *position);
    }
}

pub fn line_shooter_observer(
    trigger: On<TimerEvent>,
    mut pool: ResMut<ObjectPool>,
    shooters: Query<(&LineShooter, &MapPosition)>,
    mut commands: Commands,
) {
    let Ok((shooter, position)) = shooters.get(trigger.event().entity) else {
        return;
    };
    fire_line_shot(&mut pool, &mut commands, shooter, *position);
}

/// Spawn one projectile at `origin` and send it along the shooter's line.
///
/// Returns the projectile entity, or `None` if the pool could not provide one.
/// A shooter with no reach hands the projectile straight back to the front of
/// its pool and also returns `None`.
pub fn fire_line_shot(
    pool: &mut ObjectPool,
    commands: &mut Commands,
    shooter: &LineShooter,
    origin: MapPosition,
) -> Option<Entity> {
    let handle =
        pool.spawn_from_getter_pool(commands, shooter.category, origin, Rotation::default())?;
    if handle.capability != PoolCapability::ShootingObject {
        warn!(
            "Pool {} hands out {} objects, cannot shoot them",
            handle.category, handle.capability
        );
        return None;
    }

    let mut projectile = ShootingObject::new(shooter.speed);
    projectile.shoot(origin, shooter.target_from(origin));
    commands.entity(handle.entity).insert(projectile);
    if !projectile.shot {
        debug!("Shooter has no reach, releasing {:?}", handle.entity);
        commands.trigger(PoolReleaseEvent {
            entity: handle.entity,
            category: handle.category,
            move_to_front: true,
        });
        return None;
    }
    debug!(
        "Shot {:?} from ({}, {})",
        handle.entity, origin.x, origin.y
    );
    Some(handle.entity)
}
