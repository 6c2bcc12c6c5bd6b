//! Regenerating platform observers.
//!
//! # System Flow
//!
//! 1. A [`CollisionEvent`] touching a solid platform starts its disappear
//!    countdown ([`regenerate_touch_observer`])
//! 2. On completion, [`regenerate_timer_observer`] marks it gone, triggers
//!    [`RegenerateKind::Disappeared`], re-arms the timer with `time_to_regen`
//!    and defers the restart to the next frame
//! 3. On the next completion it becomes solid again, triggers
//!    [`RegenerateKind::Regenerated`] and re-arms with `time_to_disappear`,
//!    waiting for the next touch

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::regenerate::{RegenPhase, RegenerateOnTimer};
use crate::components::timer::Timer;
use crate::events::collision::CollisionEvent;
use crate::events::regenerate::{RegenerateEvent, RegenerateKind};
use crate::events::timer::TimerEvent;
use crate::resources::tickscheduler::TickScheduler;

pub fn regenerate_touch_observer(
    trigger: On<CollisionEvent>,
    mut platforms: Query<(&mut RegenerateOnTimer, &mut Timer)>,
) {
    for entity in trigger.event().entities() {
        let Ok((mut regen, mut timer)) = platforms.get_mut(entity) else {
            continue;
        };
        if regen.trigger(&mut timer) {
            debug!("{:?} touched, disappearing in {}s", entity, regen.time_to_disappear);
        }
    }
}

pub fn regenerate_timer_observer(
    trigger: On<TimerEvent>,
    mut platforms: Query<(&mut RegenerateOnTimer, &mut Timer)>,
    mut scheduler: ResMut<TickScheduler>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok((mut regen, mut timer)) = platforms.get_mut(entity) else {
        return;
    };

    match regen.phase {
        RegenPhase::Disappearing => {
            regen.phase = RegenPhase::Gone;
            timer.set_timer(regen.time_to_regen);
            scheduler.defer_start(entity);
            debug!("{:?} gone, back in {}s", entity, regen.time_to_regen);
            commands.trigger(RegenerateEvent {
                entity,
                kind: RegenerateKind::Disappeared,
            });
        }
        RegenPhase::Gone => {
            regen.phase = RegenPhase::Solid;
            timer.set_timer(regen.time_to_disappear);
            debug!("{:?} regenerated", entity);
            commands.trigger(RegenerateEvent {
                entity,
                kind: RegenerateKind::Regenerated,
            });
        }
        RegenPhase::Solid => {}
    }
}
