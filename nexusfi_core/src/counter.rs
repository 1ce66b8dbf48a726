//! Visibility-triggered animated counter.
//!
//! [`CounterState`] is the pure ramp: feed it frame timestamps and it
//! produces the displayed integer. [`Counter`] drives it from a
//! [`Scheduler`] frame loop and starts it on the first visibility signal.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::schedule::{Millis, Scheduler, TaskHandle, VisibilityObserver};

/// Ramp duration used by stat cards when the config does not override it.
pub const DEFAULT_DURATION_MS: u64 = 2500;

/// Quartic ease-out: fast start, decelerating into the endpoint.
///
/// `progress` is clamped to `[0, 1]`.
pub fn ease_out_quart(progress: f64) -> f64 {
    let rest = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - rest.powi(4)
}

/// Fraction of the ramp elapsed, clamped to `[0, 1]`.
///
/// A zero duration is complete immediately.
pub fn ramp_progress(elapsed: Millis, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed / duration_ms as f64).clamp(0.0, 1.0)
}

/// Displayed value for `target` at `progress`.
pub fn value_at(target: u64, progress: f64) -> u64 {
    if progress >= 1.0 {
        return target;
    }
    let eased = (target as f64 * ease_out_quart(progress)).floor() as u64;
    eased.min(target)
}

/// Result of feeding one frame into a [`CounterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The ramp has not started; nothing to do.
    Idle,
    /// Timestamp not after the previous frame; ignored.
    Stale,
    /// Value updated, more frames needed.
    Continue,
    /// `current == target`, the ramp is over.
    Finished,
}

/// Owned state of one counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    target: u64,
    duration_ms: u64,
    current: u64,
    started: bool,
    visible: bool,
    finished: bool,
    start_time: Option<Millis>,
    last_tick: Option<Millis>,
}

impl CounterState {
    /// Fresh counter at 0. Without gating it counts as visible already.
    pub fn new(target: u64, duration_ms: u64, gate_on_visibility: bool) -> Self {
        Self {
            target,
            duration_ms,
            current: 0,
            started: false,
            visible: !gate_on_visibility,
            finished: false,
            start_time: None,
            last_tick: None,
        }
    }

    /// Value the ramp ends on.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Ramp length in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Last displayed value.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Whether the one-shot start latch has fired.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the host element has been seen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the ramp reached its target.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Timestamp of the first processed frame.
    pub fn start_time(&self) -> Option<Millis> {
        self.start_time
    }

    /// Record that the host has been on screen. Never reverts.
    pub fn mark_visible(&mut self) {
        self.visible = true;
    }

    /// Latch the ramp. Returns `true` only the first time it is allowed to
    /// start (visible and never started before).
    pub fn try_start(&mut self) -> bool {
        if !self.visible || self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Replace target and duration. Ignored once the ramp has started.
    pub fn retarget(&mut self, target: u64, duration_ms: u64) -> bool {
        if self.started {
            return false;
        }
        self.target = target;
        self.duration_ms = duration_ms;
        true
    }

    /// Advance the ramp to frame time `now`.
    pub fn tick(&mut self, now: Millis) -> Tick {
        if !self.started || !self.visible {
            return Tick::Idle;
        }
        if self.finished {
            return Tick::Finished;
        }
        if let Some(last) = self.last_tick
            && now <= last
        {
            return Tick::Stale;
        }
        self.last_tick = Some(now);

        let start = *self.start_time.get_or_insert(now);
        let progress = ramp_progress(now - start, self.duration_ms);

        if progress >= 1.0 || self.target == 0 {
            self.current = self.target;
            self.finished = true;
            return Tick::Finished;
        }

        self.current = self.current.max(value_at(self.target, progress));
        Tick::Continue
    }

    /// Jump straight to the target, used when no frame loop is available.
    pub fn snap_to_target(&mut self) {
        self.started = true;
        self.visible = true;
        self.current = self.target;
        self.finished = true;
    }
}

/// Drives a [`CounterState`] from a host frame loop.
///
/// Cheap to clone; clones share the same counter. Scheduled callbacks hold a
/// weak reference, so dropping every clone cancels all pending work.
#[derive(Clone)]
pub struct Counter {
    inner: Rc<CounterInner>,
}

struct CounterInner {
    state: RefCell<CounterState>,
    scheduler: Rc<dyn Scheduler>,
    on_change: Box<dyn Fn(u64)>,
    frame: RefCell<Option<TaskHandle>>,
    subscription: RefCell<Option<TaskHandle>>,
    torn_down: Cell<bool>,
}

impl Counter {
    /// Create a counter ramping to `target` over `duration_ms`.
    ///
    /// `on_change` receives every new displayed value. Without gating the
    /// ramp is scheduled right away.
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        target: u64,
        duration_ms: u64,
        gate_on_visibility: bool,
        on_change: impl Fn(u64) + 'static,
    ) -> Self {
        let counter = Self {
            inner: Rc::new(CounterInner {
                state: RefCell::new(CounterState::new(target, duration_ms, gate_on_visibility)),
                scheduler,
                on_change: Box::new(on_change),
                frame: RefCell::new(None),
                subscription: RefCell::new(None),
                torn_down: Cell::new(false),
            }),
        };
        if !gate_on_visibility {
            start(&counter.inner);
        }
        counter
    }

    /// Subscribe to the host element's first visibility signal.
    ///
    /// No-op when already visible, already subscribed or torn down. If the
    /// observer cannot be created the counter treats the host as visible.
    /// The subscription is cancelled by [`Counter::teardown`] or on drop.
    pub fn attach(&self, observer: &dyn VisibilityObserver) {
        let inner = &self.inner;
        if inner.torn_down.get()
            || inner.state.borrow().is_visible()
            || inner.subscription.borrow().is_some()
        {
            return;
        }

        // The subscription is kept until teardown: the observer's callback
        // may live inside the handle, so it must not be dropped from within.
        let weak = Rc::downgrade(inner);
        match observer.observe(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                reveal(&inner);
            }
        })) {
            Ok(handle) => *inner.subscription.borrow_mut() = Some(handle),
            Err(err) => {
                tracing::warn!("counter: {err}; treating host as visible");
                reveal(inner);
            }
        }
    }

    /// Signal that the host element is on screen.
    pub fn notify_visible(&self) {
        reveal(&self.inner);
    }

    /// Update the ramp parameters; ignored once started.
    pub fn retarget(&self, target: u64, duration_ms: u64) -> bool {
        self.inner.state.borrow_mut().retarget(target, duration_ms)
    }

    /// Currently displayed value.
    pub fn current(&self) -> u64 {
        self.inner.state.borrow().current()
    }

    /// Snapshot of the underlying state.
    pub fn state(&self) -> CounterState {
        self.inner.state.borrow().clone()
    }

    /// Whether a frame is currently scheduled.
    pub fn has_pending_frame(&self) -> bool {
        self.inner.frame.borrow().is_some()
    }

    /// Whether [`Counter::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.get()
    }

    /// Cancel the frame loop and the visibility subscription. Idempotent.
    pub fn teardown(&self) {
        let inner = &self.inner;
        if inner.torn_down.replace(true) {
            return;
        }
        let frame = inner.frame.borrow_mut().take();
        let subscription = inner.subscription.borrow_mut().take();
        if frame.is_some() {
            tracing::debug!(
                "counter: teardown mid-ramp at {}/{}",
                self.current(),
                inner.state.borrow().target()
            );
        }
        if let Some(frame) = frame {
            frame.cancel();
        }
        if let Some(subscription) = subscription {
            subscription.cancel();
        }
    }
}

impl Drop for CounterInner {
    fn drop(&mut self) {
        if let Some(frame) = self.frame.get_mut().take() {
            frame.cancel();
        }
        if let Some(subscription) = self.subscription.get_mut().take() {
            subscription.cancel();
        }
    }
}

fn reveal(inner: &Rc<CounterInner>) {
    if inner.torn_down.get() {
        return;
    }
    inner.state.borrow_mut().mark_visible();
    start(inner);
}

fn start(inner: &Rc<CounterInner>) {
    if inner.torn_down.get() || !inner.state.borrow_mut().try_start() {
        return;
    }
    {
        let state = inner.state.borrow();
        tracing::debug!(
            "counter: ramp to {} over {}ms",
            state.target(),
            state.duration_ms()
        );
    }
    schedule_frame(inner);
}

fn schedule_frame(inner: &Rc<CounterInner>) {
    if inner.torn_down.get() {
        return;
    }
    let weak: Weak<CounterInner> = Rc::downgrade(inner);
    let requested = inner.scheduler.request_frame(Box::new(move |now| {
        if let Some(inner) = weak.upgrade() {
            on_frame(&inner, now);
        }
    }));

    match requested {
        Ok(handle) => *inner.frame.borrow_mut() = Some(handle),
        Err(err) => {
            tracing::warn!("counter: {err}; snapping to target");
            let value = {
                let mut state = inner.state.borrow_mut();
                state.snap_to_target();
                state.current()
            };
            (inner.on_change)(value);
        }
    }
}

fn on_frame(inner: &Rc<CounterInner>, now: Millis) {
    if let Some(fired) = inner.frame.borrow_mut().take() {
        fired.release();
    }
    if inner.torn_down.get() {
        return;
    }

    let (tick, before, after) = {
        let mut state = inner.state.borrow_mut();
        let before = state.current();
        let tick = state.tick(now);
        (tick, before, state.current())
    };

    if after != before {
        (inner.on_change)(after);
        // `on_change` may have torn the counter down.
        if inner.torn_down.get() {
            return;
        }
    }

    match tick {
        Tick::Continue | Tick::Stale => schedule_frame(inner),
        Tick::Finished => tracing::debug!("counter: settled at {after}"),
        Tick::Idle => {}
    }
}
