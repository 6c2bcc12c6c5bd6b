//! Timer operations deferred to the next frame.
//!
//! Some reactions must not start a timer on the frame they happen, for
//! example re-arming the very timer whose completion is being handled. They
//! queue the operation here instead; the
//! [`apply_deferred_timer_ops`](crate::systems::timer::apply_deferred_timer_ops)
//! system applies the queue at the start of the next frame, before any timer
//! is ticked.
//!
//! # Example
//!
//! ```ignore
//! fn on_done(trigger: On<TimerEvent>, mut scheduler: ResMut<TickScheduler>) {
//!     scheduler.defer_start(trigger.entity);
//! }
//! ```

use bevy_ecs::prelude::*;
use std::fmt;

use crate::components::timer::TimerAction;

/// One queued timer operation.
pub enum DeferredTimerOp {
    /// One-shot start, optionally replacing the pending action first.
    Start {
        entity: Entity,
        on_done: Option<TimerAction>,
    },
    StartLoop { entity: Entity },
}

impl DeferredTimerOp {
    pub fn entity(&self) -> Entity {
        match self {
            DeferredTimerOp::Start { entity, .. } => *entity,
            DeferredTimerOp::StartLoop { entity } => *entity,
        }
    }
}

impl fmt::Debug for DeferredTimerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeferredTimerOp::Start { entity, on_done } => f
                .debug_struct("Start")
                .field("entity", entity)
                .field("on_done", &on_done.is_some())
                .finish(),
            DeferredTimerOp::StartLoop { entity } => {
                f.debug_struct("StartLoop").field("entity", entity).finish()
            }
        }
    }
}

/// FIFO of timer operations waiting for the next frame boundary.
#[derive(Resource, Default, Debug)]
pub struct TickScheduler {
    ops: Vec<DeferredTimerOp>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `entity`'s timer as a one-shot on the next frame.
    pub fn defer_start(&mut self, entity: Entity) {
        self.ops.push(DeferredTimerOp::Start {
            entity,
            on_done: None,
        });
    }

    /// Like [`TickScheduler::defer_start`], setting the pending action right before starting.
    pub fn defer_start_with<F>(&mut self, entity: Entity, on_done: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.ops.push(DeferredTimerOp::Start {
            entity,
            on_done: Some(Box::new(on_done)),
        });
    }

    /// Start `entity`'s timer in looping mode on the next frame.
    pub fn defer_start_loop(&mut self, entity: Entity) {
        self.ops.push(DeferredTimerOp::StartLoop { entity });
    }

    /// Queue an already built operation again, after everything queued so far.
    pub fn requeue(&mut self, op: DeferredTimerOp) {
        self.ops.push(op);
    }

    /// Take every queued operation, oldest first.
    pub fn drain(&mut self) -> Vec<DeferredTimerOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_order_and_empties() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut scheduler = TickScheduler::new();
        scheduler.defer_start(a);
        scheduler.defer_start_loop(b);
        scheduler.defer_start_with(a, || {});
        assert_eq!(scheduler.len(), 3);

        let ops = scheduler.drain();
        assert!(scheduler.is_empty());
        assert_eq!(
            ops.iter().map(DeferredTimerOp::entity).collect::<Vec<_>>(),
            vec![a, b, a]
        );
        assert!(matches!(ops[0], DeferredTimerOp::Start { on_done: None, .. }));
        assert!(matches!(ops[1], DeferredTimerOp::StartLoop { .. }));
        assert!(matches!(ops[2], DeferredTimerOp::Start { on_done: Some(_), .. }));
    }

    #[test]
    fn test_requeue_appends() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut scheduler = TickScheduler::new();
        scheduler.defer_start(a);
        let kept = scheduler.drain();
        scheduler.defer_start_loop(b);
        for op in kept {
            scheduler.requeue(op);
        }
        assert_eq!(
            scheduler.drain().iter().map(DeferredTimerOp::entity).collect::<Vec<_>>(),
            vec![b, a]
        );
    }
}
