//! Timer systems.
//!
//! - [`apply_deferred_timer_ops`] – starts timers queued on the
//!   [`TickScheduler`] during the previous frame
//! - [`update_timers`] – ticks every running [`Timer`] and triggers a
//!   [`TimerEvent`] on each completion
//!
//! Both run every frame, in that order, so a deferred start is ticked on the
//! frame it takes effect.

use bevy_ecs::entity_disabling::Disabled;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::tickscheduler::{DeferredTimerOp, TickScheduler};
use crate::resources::worldtime::WorldTime;

/// Apply every operation queued on the [`TickScheduler`].
///
/// Operations whose entity is gone or has no [`Timer`] are dropped. Operations
/// for an inactive (pooled) entity stay queued until it is active again.
pub fn apply_deferred_timer_ops(
    mut scheduler: ResMut<TickScheduler>,
    mut timers: Query<(&mut Timer, Has<Disabled>)>,
) {
    if scheduler.is_empty() {
        return;
    }
    for op in scheduler.drain() {
        let entity = op.entity();
        let Ok((mut timer, disabled)) = timers.get_mut(entity) else {
            debug!("Deferred timer op dropped, {:?} has no timer", entity);
            continue;
        };
        if disabled {
            scheduler.requeue(op);
            continue;
        }
        match op {
            DeferredTimerOp::Start { on_done, .. } => {
                if let Some(action) = on_done {
                    timer.set_on_done(action);
                }
                timer.start();
            }
            DeferredTimerOp::StartLoop { .. } => timer.start_loop(),
        }
    }
}

/// Advance all running timers by the frame delta.
///
/// Paused and finished timers are skipped without being borrowed mutably, so
/// change detection only sees timers that actually moved.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut timer) in query.iter_mut() {
        if !timer.is_running() || timer.is_paused() {
            continue;
        }
        if timer.tick(dt) {
            commands.trigger(TimerEvent { entity });
        }
    }
}
