//! Countdown timer with a single pending completion action.
//!
//! The [`Timer`] counts `current_time` up towards `target_time` while it is
//! running. It is shared by many unrelated gameplay pieces (ability cooldowns,
//! platform fall delays, spawn-rate loops) so none of them re-implement tick
//! bookkeeping.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start──> Running ──target reached──> Done
//!                  │  ▲  └─looping: fire, reset, stay Running
//!            pause │  │ resume
//!                  ▼  │
//!                 (paused)
//! Running ──cancel──> Done          Done ──start──> Running
//! ```
//!
//! # Pending action
//!
//! A timer holds at most one [`TimerAction`]. Setting a new one overwrites the
//! previous one. A one-shot timer takes and clears the action when it fires; a
//! looping timer keeps it and fires it once per cycle.
//!
//! Callbacks cannot reach back into the timer that owns them. When a reaction
//! needs world access (re-arming the timer, spawning entities) listen for
//! [`TimerEvent`](crate::events::timer::TimerEvent) instead, which the
//! [`update_timers`](crate::systems::timer::update_timers) system triggers on
//! every completion.
//!
//! # Example
//!
//! ```ignore
//! let mut cooldown = Timer::new(0.5);
//! cooldown.set_on_done(|| log::info!("ready again"));
//! cooldown.start();
//! cooldown.tick(0.25); // still running
//! cooldown.tick(0.25); // fires, now done
//! ```

use bevy_ecs::prelude::Component;
use log::warn;
use std::fmt;

/// Relative slack when comparing elapsed time to the target. Frame deltas such
/// as `1.0 / 60.0` are not exact in binary, so their sum can land just short of
/// a target they should reach.
const COMPLETION_TOLERANCE: f64 = 1e-6;

/// Zero-argument callback stored in a timer's single action slot.
pub type TimerAction = Box<dyn FnMut() + Send + Sync>;

/// Run state of a [`Timer`]. Pausing is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Never started.
    #[default]
    Idle,
    /// Accumulating time on every tick.
    Running,
    /// Completed or canceled.
    Done,
}

/// Cancelable, pausable, one-shot or looping countdown.
///
/// Ticked once per frame by [`update_timers`](crate::systems::timer::update_timers)
/// when attached to an entity, or by hand through [`Timer::tick`].
#[derive(Component, Default)]
pub struct Timer {
    target_time: f32,
    current_time: f64,
    state: TimerState,
    looping: bool,
    paused: bool,
    pending_action: Option<TimerAction>,
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("target_time", &self.target_time)
            .field("current_time", &self.current_time)
            .field("state", &self.state)
            .field("looping", &self.looping)
            .field("paused", &self.paused)
            .field("pending_action", &self.pending_action.is_some())
            .finish()
    }
}

impl Timer {
    /// Create an idle timer that will count to `target_time` seconds.
    pub fn new(target_time: f32) -> Self {
        Timer {
            target_time,
            ..Default::default()
        }
    }

    /// Start (or restart) the timer from zero as a one-shot.
    ///
    /// Restarting a running timer does not stack: elapsed time goes back to
    /// zero and the timer is still ticked once per frame. A non-positive target
    /// completes immediately and fires the pending action.
    pub fn start(&mut self) {
        self.arm(false);
    }

    /// Start (or restart) the timer from zero in looping mode.
    ///
    /// Every completion fires the pending action, resets elapsed time to zero
    /// and keeps running until canceled.
    pub fn start_loop(&mut self) {
        self.arm(true);
    }

    fn arm(&mut self, looping: bool) {
        self.current_time = 0.0;
        self.paused = false;
        self.looping = looping;
        if self.target_time <= 0.0 {
            if looping {
                warn!(
                    "Looping timer started with non-positive target {}; running it once",
                    self.target_time
                );
                self.looping = false;
            }
            self.state = TimerState::Done;
            self.fire();
            return;
        }
        self.state = TimerState::Running;
    }

    /// Store the action to run on the next completion, replacing any previous one.
    pub fn set_on_done<F>(&mut self, action: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.pending_action = Some(Box::new(action));
    }

    /// Builder form of [`Timer::set_on_done`].
    pub fn with_on_done<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.set_on_done(action);
        self
    }

    /// Returns `true` if an action is waiting for the next completion.
    pub fn has_pending_action(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Re-arm with a new duration. Elapsed time resets to zero; run state is kept.
    pub fn set_timer(&mut self, target_time: f32) {
        self.target_time = target_time;
        self.current_time = 0.0;
    }

    /// Freeze or resume accumulation. Only affects a running timer.
    pub fn pause(&mut self, paused: bool) {
        if self.state == TimerState::Running {
            self.paused = paused;
        }
    }

    /// Stop ticking and mark done. Elapsed time and the pending action are kept.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Done;
        }
        self.paused = false;
    }

    /// Like [`Timer::cancel`], but also drops the pending action.
    pub fn cancel_and_clear(&mut self) {
        self.cancel();
        self.pending_action = None;
    }

    /// Progress in `[0, 1]`. A non-positive target reports `1.0`.
    pub fn normalized(&self) -> f32 {
        if self.target_time <= 0.0 {
            return 1.0;
        }
        (self.current_time() / self.target_time).clamp(0.0, 1.0)
    }

    /// Advance by `dt` seconds. Returns `true` if the timer completed on this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.paused || self.state != TimerState::Running {
            return false;
        }
        self.current_time += f64::from(dt.max(0.0));
        let target = f64::from(self.target_time);
        if self.current_time + target * COMPLETION_TOLERANCE < target {
            return false;
        }

        self.current_time = target;
        if !self.looping {
            self.state = TimerState::Done;
        }
        self.fire();
        if self.looping {
            self.current_time = 0.0;
        }
        true
    }

    fn fire(&mut self) {
        if self.looping {
            if let Some(action) = self.pending_action.as_mut() {
                action();
            }
        } else if let Some(mut action) = self.pending_action.take() {
            action();
        }
    }

    /// `true` when never started, completed, or canceled.
    pub fn is_done(&self) -> bool {
        self.state != TimerState::Running
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Seconds accumulated since the last (re)start.
    pub fn current_time(&self) -> f32 {
        self.current_time as f32
    }

    pub fn target_time(&self) -> f32 {
        self.target_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn counting_timer(target: f32) -> (Timer, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let timer = Timer::new(target).with_on_done(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (timer, fired)
    }

    // ==================== CONSTRUCTION ====================

    #[test]
    fn test_new_timer_is_idle_and_done() {
        let timer = Timer::new(2.0);
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.is_done());
        assert!(!timer.is_running());
        assert!(approx_eq(timer.current_time(), 0.0));
        assert!(approx_eq(timer.target_time(), 2.0));
    }

    #[test]
    fn test_idle_timer_ignores_ticks() {
        let (mut timer, fired) = counting_timer(1.0);
        assert!(!timer.tick(5.0));
        assert!(approx_eq(timer.current_time(), 0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    // ==================== ONE-SHOT ====================

    #[test]
    fn test_fires_once_when_target_reached() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start();
        assert!(!timer.tick(0.5));
        assert!(!timer.is_done());
        assert!(timer.tick(0.5));
        assert!(timer.is_done());
        assert_eq!(timer.state(), TimerState::Done);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Further ticks change nothing
        assert!(!timer.tick(1.0));
        assert!(approx_eq(timer.current_time(), 1.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_overshoot_is_clamped_to_target() {
        let (mut timer, _) = counting_timer(1.0);
        timer.start();
        timer.tick(3.0);
        assert!(approx_eq(timer.current_time(), 1.0));
        assert!(approx_eq(timer.normalized(), 1.0));
    }

    #[test]
    fn test_short_of_target_never_fires() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start();
        for _ in 0..3 {
            timer.tick(0.25);
        }
        assert!(!timer.is_done());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_one_shot_action_is_cleared_after_firing() {
        let (mut timer, fired) = counting_timer(0.5);
        timer.start();
        timer.tick(0.5);
        assert!(!timer.has_pending_action());

        timer.start();
        timer.tick(0.5);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restart_resets_elapsed_time() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(0.75);
        timer.start();
        assert!(approx_eq(timer.current_time(), 0.0));
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
    }

    #[test]
    fn test_non_positive_target_completes_immediately() {
        let (mut timer, fired) = counting_timer(0.0);
        timer.start();
        assert!(timer.is_done());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(approx_eq(timer.normalized(), 1.0));
    }

    #[test]
    fn test_non_positive_target_does_not_loop() {
        let (mut timer, fired) = counting_timer(-1.0);
        timer.start_loop();
        assert!(timer.is_done());
        assert!(!timer.is_looping());
        timer.tick(1.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    // ==================== ACTIONS ====================

    #[test]
    fn test_last_action_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut timer = Timer::new(1.0);
        let f = first.clone();
        timer.set_on_done(move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        let s = second.clone();
        timer.set_on_done(move || {
            s.fetch_add(1, Ordering::SeqCst);
        });
        timer.start();
        timer.tick(1.0);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_action_set_after_completion_does_not_fire_retroactively() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(1.0);

        let fired = Arc::new(AtomicUsize::new(0));
        let f = fired.clone();
        timer.set_on_done(move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        timer.tick(1.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(timer.has_pending_action());
    }

    // ==================== LOOPING ====================

    #[test]
    fn test_loop_fires_once_per_cycle() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start_loop();
        for _ in 0..12 {
            timer.tick(0.25);
        }
        assert_eq!(fired.load(Ordering::SeqCst), 3);
        assert!(timer.is_running());
        assert!(timer.has_pending_action());
        assert!(approx_eq(timer.current_time(), 0.0));
    }

    #[test]
    fn test_loop_stops_on_cancel() {
        let (mut timer, fired) = counting_timer(0.5);
        timer.start_loop();
        timer.tick(0.5);
        timer.cancel();
        timer.tick(0.5);
        timer.tick(0.5);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(timer.is_done());
    }

    #[test]
    fn test_sixty_fps_frames_complete_on_time() {
        for target in [0.75_f32, 1.0, 1.25, 2.0] {
            let (mut timer, fired) = counting_timer(target);
            timer.start();
            let frames = (target * 60.0).round() as usize;
            for _ in 0..frames - 1 {
                assert!(!timer.tick(1.0 / 60.0));
            }
            assert!(timer.tick(1.0 / 60.0), "target {target} finished late");
            assert!(timer.is_done());
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_sixty_fps_loop_fires_every_cycle() {
        for target in [0.75_f32, 1.0, 1.25, 2.0] {
            let (mut timer, fired) = counting_timer(target);
            timer.start_loop();
            let frames = (target * 60.0).round() as usize;
            for _ in 0..frames * 4 {
                timer.tick(1.0 / 60.0);
            }
            assert_eq!(fired.load(Ordering::SeqCst), 4, "target {target}");
        }
    }

    // ==================== PAUSE ====================

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start();
        timer.tick(0.25);
        timer.pause(true);
        assert!(timer.is_paused());
        for _ in 0..10 {
            assert!(!timer.tick(0.5));
        }
        assert!(approx_eq(timer.current_time(), 0.25));

        timer.pause(false);
        timer.tick(0.5);
        assert!(approx_eq(timer.current_time(), 0.75));
        assert!(timer.tick(0.25));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pause_on_idle_timer_is_noop() {
        let mut timer = Timer::new(1.0);
        timer.pause(true);
        assert!(!timer.is_paused());
        timer.start();
        assert!(!timer.tick(0.5) && approx_eq(timer.current_time(), 0.5));
    }

    #[test]
    fn test_start_clears_pause() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.pause(true);
        timer.start();
        assert!(!timer.is_paused());
    }

    // ==================== CANCEL ====================

    #[test]
    fn test_cancel_keeps_elapsed_and_action_without_firing() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start();
        timer.tick(0.5);
        timer.cancel();
        assert!(timer.is_done());
        assert!(approx_eq(timer.current_time(), 0.5));
        assert!(timer.has_pending_action());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        // The kept action fires on the next run
        timer.start();
        timer.tick(1.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_and_clear_drops_stale_action() {
        let (mut timer, fired) = counting_timer(1.0);
        timer.start();
        timer.cancel_and_clear();
        assert!(!timer.has_pending_action());
        timer.start();
        timer.tick(1.0);
        assert!(timer.is_done());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_idle_timer_is_noop() {
        let mut timer = Timer::new(1.0);
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Idle);
    }

    // ==================== SET TIMER / NORMALIZED ====================

    #[test]
    fn test_set_timer_rearms_without_changing_state() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(0.5);
        timer.set_timer(4.0);
        assert!(timer.is_running());
        assert!(approx_eq(timer.current_time(), 0.0));
        assert!(approx_eq(timer.target_time(), 4.0));

        let mut done = Timer::new(1.0);
        done.start();
        done.tick(1.0);
        done.set_timer(2.0);
        assert!(done.is_done());
    }

    #[test]
    fn test_normalized_progress() {
        let mut timer = Timer::new(2.0);
        assert!(approx_eq(timer.normalized(), 0.0));
        timer.start();
        timer.tick(0.5);
        assert!(approx_eq(timer.normalized(), 0.25));
        timer.tick(1.0);
        assert!(approx_eq(timer.normalized(), 0.75));
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut timer = Timer::new(1.0);
        timer.start();
        timer.tick(0.5);
        timer.tick(-10.0);
        assert!(approx_eq(timer.current_time(), 0.5));
    }
}
