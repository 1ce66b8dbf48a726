//! Counter ramp driven on a virtual clock.
//! Developed with 💀 by The NexusFi Team (c)2025

use std::cell::RefCell;
use std::rc::Rc;

use nexusfi_core::{Counter, HostError, ManualScheduler, ManualViewport, Scheduler, TaskHandle};
use nexusfi_core::schedule::{FrameCallback, Millis, TimerCallback, VisibilityObserver};

const FRAME: Millis = 16.0;

/// Counter plus a log of every value it emitted.
fn counter(
    clock: &ManualScheduler,
    target: u64,
    duration_ms: u64,
    gate: bool,
) -> (Counter, Rc<RefCell<Vec<u64>>>) {
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = emitted.clone();
    let counter = Counter::new(
        Rc::new(clock.clone()),
        target,
        duration_ms,
        gate,
        move |value| sink.borrow_mut().push(value),
    );
    (counter, emitted)
}

// ============================================
// Gating
// ============================================

mod gating {
    use super::*;

    #[test]
    fn stays_at_zero_while_never_visible() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, emitted) = counter(&clock, 100, 1000, true);
        counter.attach(&viewport);

        clock.run_frames(200, FRAME);

        assert_eq!(counter.current(), 0);
        assert!(emitted.borrow().is_empty());
        assert_eq!(clock.pending_frames(), 0);
        assert!(!counter.state().is_started());
    }

    #[test]
    fn starts_on_first_visibility() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, _) = counter(&clock, 100, 1000, true);
        counter.attach(&viewport);

        clock.advance(5_000.0);
        viewport.reveal();
        assert!(counter.state().is_started());
        assert_eq!(clock.pending_frames(), 1);

        // First frame records the start time, so elapsed time before the
        // reveal does not count towards the ramp.
        clock.frame(FRAME);
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.state().start_time(), Some(5_000.0 + FRAME));
    }

    #[test]
    fn ungated_counter_starts_immediately() {
        let clock = ManualScheduler::new();
        let (counter, _) = counter(&clock, 10, 100, false);
        assert!(counter.state().is_started());
        clock.run_frames(10, FRAME);
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn already_revealed_viewport_starts_on_attach() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        viewport.reveal();

        let (counter, _) = counter(&clock, 10, 100, true);
        counter.attach(&viewport);

        assert!(counter.state().is_started());
        assert_eq!(viewport.watchers(), 0);
    }

    #[test]
    fn attaching_twice_subscribes_once() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, _) = counter(&clock, 10, 100, true);
        counter.attach(&viewport);
        counter.attach(&viewport);
        assert_eq!(viewport.watchers(), 1);
    }
}

// ============================================
// Ramp shape
// ============================================

mod ramp {
    use super::*;

    #[test]
    fn is_monotonic_and_converges_exactly() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 47, 2500, false);

        clock.run_frames(400, FRAME);

        let values = emitted.borrow();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values.last(), Some(&47));
        assert_eq!(counter.current(), 47);
        assert!(counter.state().is_finished());
        assert_eq!(clock.pending_frames(), 0);
    }

    #[test]
    fn half_way_shows_ninety_three_of_hundred() {
        let clock = ManualScheduler::new();
        let (counter, _) = counter(&clock, 100, 1000, false);

        clock.frame(10.0); // start timestamp
        clock.frame(500.0);
        assert_eq!(counter.current(), 93);
    }

    #[test]
    fn value_is_pinned_after_duration() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 125, 2500, false);

        clock.frame(FRAME);
        clock.frame(2_500.0);
        assert_eq!(counter.current(), 125);
        let emitted_after_finish = emitted.borrow().len();

        clock.run_frames(50, FRAME);
        assert_eq!(counter.current(), 125);
        assert_eq!(emitted.borrow().len(), emitted_after_finish);
    }

    #[test]
    fn zero_target_settles_without_emitting() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 0, 1000, false);

        clock.frame(FRAME);
        assert_eq!(counter.current(), 0);
        assert!(counter.state().is_finished());
        assert!(emitted.borrow().is_empty());
        assert_eq!(clock.pending_frames(), 0);
    }

    #[test]
    fn zero_duration_jumps_on_first_frame() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 142, 0, false);

        clock.frame(FRAME);
        assert_eq!(counter.current(), 142);
        assert_eq!(*emitted.borrow(), vec![142]);
    }

    #[test]
    fn counters_are_independent() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (fast, _) = counter(&clock, 10, 100, false);
        let (gated, _) = counter(&clock, 10, 100, true);
        gated.attach(&viewport);

        clock.run_frames(20, FRAME);
        assert_eq!(fast.current(), 10);
        assert_eq!(gated.current(), 0);
    }
}

// ============================================
// One-shot latch
// ============================================

mod latch {
    use super::*;

    #[test]
    fn second_visibility_mid_ramp_does_not_restart() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, emitted) = counter(&clock, 100, 1000, true);
        counter.attach(&viewport);
        viewport.reveal();

        clock.frame(FRAME);
        let started_at = counter.state().start_time();
        clock.frame(400.0);
        let mid = counter.current();
        assert!(mid > 0);

        counter.notify_visible();
        viewport.reveal();
        assert_eq!(clock.pending_frames(), 1);

        clock.frame(FRAME);
        assert!(counter.current() >= mid);
        assert_eq!(counter.state().start_time(), started_at);
        assert!(!emitted.borrow().contains(&0));
    }

    #[test]
    fn visibility_after_completion_is_ignored() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 47, 100, false);
        clock.run_frames(20, FRAME);
        let seen = emitted.borrow().len();

        counter.notify_visible();
        clock.run_frames(20, FRAME);

        assert_eq!(counter.current(), 47);
        assert_eq!(emitted.borrow().len(), seen);
        assert_eq!(clock.pending_frames(), 0);
    }

    #[test]
    fn retarget_after_start_is_ignored() {
        let clock = ManualScheduler::new();
        let (counter, _) = counter(&clock, 47, 100, false);
        assert!(!counter.retarget(1_000, 5_000));
        clock.run_frames(20, FRAME);
        assert_eq!(counter.current(), 47);
    }

    #[test]
    fn retarget_before_start_applies() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, _) = counter(&clock, 47, 100, true);
        counter.attach(&viewport);
        assert!(counter.retarget(125, 100));

        viewport.reveal();
        clock.run_frames(20, FRAME);
        assert_eq!(counter.current(), 125);
    }
}

// ============================================
// Teardown
// ============================================

mod teardown {
    use super::*;

    #[test]
    fn mid_ramp_teardown_freezes_the_value() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 100, 1000, false);
        clock.frame(FRAME);
        clock.frame(300.0);
        let frozen = counter.current();
        let seen = emitted.borrow().len();

        counter.teardown();
        counter.teardown();
        assert!(counter.is_torn_down());
        assert!(!counter.has_pending_frame());
        assert_eq!(clock.pending_frames(), 0);

        clock.run_frames(100, FRAME);
        counter.notify_visible();
        assert_eq!(counter.current(), frozen);
        assert_eq!(emitted.borrow().len(), seen);
    }

    #[test]
    fn teardown_before_visibility_unsubscribes() {
        let clock = ManualScheduler::new();
        let viewport = ManualViewport::new();
        let (counter, emitted) = counter(&clock, 100, 1000, true);
        counter.attach(&viewport);
        assert_eq!(viewport.watchers(), 1);

        counter.teardown();
        assert_eq!(viewport.watchers(), 0);

        viewport.reveal();
        clock.run_frames(100, FRAME);
        assert_eq!(counter.current(), 0);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn dropping_the_counter_cancels_its_frame() {
        let clock = ManualScheduler::new();
        let (counter, emitted) = counter(&clock, 100, 1000, false);
        assert_eq!(clock.pending_frames(), 1);

        drop(counter);
        assert_eq!(clock.pending_frames(), 0);
        clock.run_frames(100, FRAME);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn completed_ramp_leaves_no_frame_behind() {
        let clock = ManualScheduler::new();
        let (counter, _) = counter(&clock, 10, 100, false);
        clock.run_frames(20, FRAME);
        assert!(!counter.has_pending_frame());
        let fired = clock.fired_frames();

        clock.run_frames(20, FRAME);
        assert_eq!(clock.fired_frames(), fired);
    }

    #[test]
    fn teardown_from_on_change_schedules_nothing() {
        let clock = ManualScheduler::new();
        let slot: Rc<RefCell<Option<Counter>>> = Rc::new(RefCell::new(None));
        let owner = slot.clone();
        let counter = Counter::new(Rc::new(clock.clone()), 100, 1000, false, move |_| {
            if let Some(counter) = owner.borrow().as_ref() {
                counter.teardown();
            }
        });
        *slot.borrow_mut() = Some(counter.clone());

        clock.run_frames(5, FRAME);

        assert!(counter.is_torn_down());
        assert!(!counter.has_pending_frame());
        assert_eq!(clock.pending_frames(), 0);
        let frozen = counter.current();
        clock.run_frames(100, FRAME);
        assert_eq!(counter.current(), frozen);
        assert!(frozen < 100);

        slot.borrow_mut().take();
    }
}

// ============================================
// Host failures
// ============================================

/// Host without a frame loop or intersection observer.
struct BrokenHost;

impl Scheduler for BrokenHost {
    fn now(&self) -> Millis {
        0.0
    }

    fn request_frame(&self, _callback: FrameCallback) -> Result<TaskHandle, HostError> {
        Err(HostError::FrameUnavailable("no window".into()))
    }

    fn set_timeout(
        &self,
        _delay: std::time::Duration,
        _callback: TimerCallback,
    ) -> Result<TaskHandle, HostError> {
        Err(HostError::TimerUnavailable("no window".into()))
    }
}

impl VisibilityObserver for BrokenHost {
    fn observe(&self, _on_visible: TimerCallback) -> Result<TaskHandle, HostError> {
        Err(HostError::ObserverUnavailable("no IntersectionObserver".into()))
    }
}

mod host_failures {
    use super::*;

    #[test]
    fn missing_frame_loop_snaps_to_target() {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        let counter = Counter::new(Rc::new(BrokenHost), 142, 2500, false, move |value| {
            sink.borrow_mut().push(value)
        });

        assert_eq!(counter.current(), 142);
        assert!(counter.state().is_finished());
        assert_eq!(*emitted.borrow(), vec![142]);
    }

    #[test]
    fn missing_observer_counts_as_visible() {
        let clock = ManualScheduler::new();
        let (counter, _) = counter(&clock, 10, 100, true);
        counter.attach(&BrokenHost);

        assert!(counter.state().is_visible());
        clock.run_frames(20, FRAME);
        assert_eq!(counter.current(), 10);
    }
}
