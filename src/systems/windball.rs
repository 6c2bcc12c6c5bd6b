//! Windball casting and flight.
//!
//! - [`windball_cast_system`] – throws a windball for every caster that wants to
//!   cast and is off cooldown
//! - [`windball_system`] – moves thrown windballs and slows them down
//! - [`windball_collision_observer`] – releases a windball that touched
//!   something back to the front of its pool

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::cooldown::AbilityCooldown;
use crate::components::mapposition::MapPosition;
use crate::components::pooled::Pooled;
use crate::components::rotation::Rotation;
use crate::components::windball::{Windball, WindballCaster, WindballState};
use crate::events::collision::CollisionEvent;
use crate::events::pool::PoolReleaseEvent;
use crate::resources::objectpool::ObjectPool;
use crate::resources::poolconfig::PoolCapability;
use crate::resources::worldtime::WorldTime;

/// Cast for every caster that asked to (or auto-casts) and is off cooldown.
///
/// The cooldown only starts when a windball actually went out.
pub fn windball_cast_system(
    mut pool: ResMut<ObjectPool>,
    mut casters: Query<(&mut WindballCaster, &mut AbilityCooldown, &MapPosition)>,
    mut windballs: Query<(&mut Windball, Has<Disabled>)>,
    mut commands: Commands,
) {
    for (mut caster, mut cooldown, position) in casters.iter_mut() {
        if !caster.wants_cast() || cooldown.is_on_cooldown() {
            continue;
        }
        if cast_windball(&mut pool, &mut commands, &mut windballs, &*caster, *position).is_some() {
            cooldown.try_use();
            caster.clear_request();
        }
    }
}

/// Spawn a windball one aim vector away from `origin` and throw it.
///
/// Returns the windball entity, or `None` if the pool could not provide one.
pub fn cast_windball(
    pool: &mut ObjectPool,
    commands: &mut Commands,
    windballs: &mut Query<(&mut Windball, Has<Disabled>)>,
    caster: &WindballCaster,
    origin: MapPosition,
) -> Option<Entity> {
    let spawn_at = origin.offset(caster.aim.0, caster.aim.1);
    let handle =
        pool.spawn_from_getter_pool(commands, caster.category, spawn_at, Rotation::default())?;
    if handle.capability != PoolCapability::Windball {
        warn!(
            "Pool {} hands out {} objects, cannot throw them",
            handle.category, handle.capability
        );
        return None;
    }
    let Ok((mut windball, _)) = windballs.get_mut(handle.entity) else {
        warn!("Pooled windball {:?} lost its Windball component", handle.entity);
        return None;
    };

    windball.throw(caster.aim, caster.throw.speed_for(caster.charge), caster.charge);
    debug!(
        "Cast windball {:?} at ({}, {}) with charge {}",
        handle.entity, spawn_at.x, spawn_at.y, caster.charge
    );
    Some(handle.entity)
}

pub fn windball_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut Windball)>,
) {
    let dt = world_time.delta;
    for (mut position, mut windball) in query.iter_mut() {
        if windball.state != WindballState::Pushing {
            continue;
        }
        let (dx, dy) = windball.step(dt);
        position.x += dx;
        position.y += dy;
    }
}

pub fn windball_collision_observer(
    trigger: On<CollisionEvent>,
    mut windballs: Query<(&mut Windball, &Pooled)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    for entity in event.entities() {
        let Ok((mut windball, pooled)) = windballs.get_mut(entity) else {
            continue;
        };
        if !windball.is_live() {
            continue;
        }
        let other = if entity == event.a { event.b } else { event.a };
        match windball.state {
            WindballState::Pushing => debug!("Windball {:?} pushed {:?}", entity, other),
            WindballState::Hovering => debug!("Windball {:?} touched by {:?}", entity, other),
            WindballState::Idle => {}
        }
        windball.reset();
        commands.trigger(PoolReleaseEvent {
            entity,
            category: pooled.category,
            move_to_front: true,
        });
    }
}
