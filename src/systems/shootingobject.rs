//! Projectile movement.
//!
//! [`shooting_object_system`] moves every shot [`ShootingObject`] towards its
//! target and releases it back to its pool on arrival.
//! [`shooting_object_collision_observer`] releases it early when it touches
//! something. Either way the projectile asks to be reused first.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::pooled::Pooled;
use crate::components::shootingobject::ShootingObject;
use crate::events::collision::CollisionEvent;
use crate::events::pool::PoolReleaseEvent;
use crate::resources::worldtime::WorldTime;

pub fn shooting_object_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut ShootingObject, &Pooled)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut position, mut projectile, pooled) in query.iter_mut() {
        if !projectile.shot {
            continue;
        }
        position.x += projectile.direction.0 * projectile.speed * dt;
        position.y += projectile.direction.1 * projectile.speed * dt;

        if projectile.has_arrived(*position) {
            projectile.shot = false;
            commands.trigger(PoolReleaseEvent {
                entity,
                category: pooled.category,
                move_to_front: true,
            });
        }
    }
}

pub fn shooting_object_collision_observer(
    trigger: On<CollisionEvent>,
    mut projectiles: Query<(&mut ShootingObject, &Pooled)>,
    mut commands: Commands,
) {
    for entity in trigger.event().entities() {
        let Ok((mut projectile, pooled)) = projectiles.get_mut(entity) else {
            continue;
        };
        if !projectile.shot {
            continue;
        }
        projectile.shot = false;
        commands.trigger(PoolReleaseEvent {
            entity,
            category: pooled.category,
            move_to_front: true,
        });
    }
}
