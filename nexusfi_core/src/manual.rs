//! Deterministic host: a virtual clock that runs frames and timers on demand.
//!
//! ```rust
//! use std::time::Duration;
//! use nexusfi_core::{ManualScheduler, Scheduler};
//!
//! let clock = ManualScheduler::new();
//! let _timer = clock.set_timeout(Duration::from_millis(100), Box::new(|| {})).unwrap();
//! clock.advance(99.0);
//! assert_eq!(clock.pending_timers(), 1);
//! clock.advance(1.0);
//! assert_eq!(clock.fired_timers(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::HostError;
use crate::schedule::{
    FrameCallback, Millis, Scheduler, TaskHandle, TimerCallback, VisibilityObserver,
};

struct PendingTimer {
    id: u64,
    due: Millis,
    callback: TimerCallback,
}

#[derive(Default)]
struct Clock {
    now: Millis,
    next_id: u64,
    frames: Vec<(u64, FrameCallback)>,
    timers: Vec<PendingTimer>,
    fired_frames: usize,
    fired_timers: usize,
}

impl Clock {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Earliest timer due at or before `until`, ties broken by registration order.
    fn pop_due(&mut self, until: Millis) -> Option<PendingTimer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
            .map(|(index, _)| index)?;
        Some(self.timers.remove(index))
    }
}

/// Virtual-clock [`Scheduler`]. Clones share the same clock.
///
/// Nothing runs until the test calls [`advance`](Self::advance) or
/// [`frame`](Self::frame). No internal borrow is held while a callback runs,
/// so callbacks may schedule or cancel freely.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    /// Clock at 0 with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta` ms, firing due timers in order.
    pub fn advance(&self, delta: Millis) {
        let until = self.clock.borrow().now + delta.max(0.0);
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let next = clock.pop_due(until);
                if let Some(timer) = &next {
                    clock.now = clock.now.max(timer.due);
                    clock.fired_timers += 1;
                }
                next
            };
            match next {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = until;
    }

    /// Advance by `delta` ms, then run one animation frame.
    ///
    /// Only frames requested before this call run; frames requested from
    /// inside a frame callback wait for the next one.
    pub fn frame(&self, delta: Millis) {
        self.advance(delta);
        let (now, frames) = {
            let mut clock = self.clock.borrow_mut();
            let frames = std::mem::take(&mut clock.frames);
            clock.fired_frames += frames.len();
            (clock.now, frames)
        };
        for (_, callback) in frames {
            callback(now);
        }
    }

    /// Run `count` frames, `delta` ms apart.
    pub fn run_frames(&self, count: usize, delta: Millis) {
        for _ in 0..count {
            self.frame(delta);
        }
    }

    /// Frame callbacks waiting for the next [`ManualScheduler::frame`].
    pub fn pending_frames(&self) -> usize {
        self.clock.borrow().frames.len()
    }

    /// Timers not yet due or not yet fired.
    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Frame callbacks delivered so far.
    pub fn fired_frames(&self) -> usize {
        self.clock.borrow().fired_frames
    }

    /// Timer callbacks delivered so far.
    pub fn fired_timers(&self) -> usize {
        self.clock.borrow().fired_timers
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Millis {
        self.clock.borrow().now
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<TaskHandle, HostError> {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id();
            clock.frames.push((id, callback));
            id
        };
        let clock = Rc::downgrade(&self.clock);
        Ok(TaskHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().frames.retain(|(pending, _)| *pending != id);
            }
        }))
    }

    fn set_timeout(
        &self,
        delay: Duration,
        callback: TimerCallback,
    ) -> Result<TaskHandle, HostError> {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id();
            let due = clock.now + delay.as_secs_f64() * 1000.0;
            clock.timers.push(PendingTimer { id, due, callback });
            id
        };
        let clock = Rc::downgrade(&self.clock);
        Ok(TaskHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().timers.retain(|timer| timer.id != id);
            }
        }))
    }
}

#[derive(Default)]
struct Viewport {
    revealed: bool,
    next_id: u64,
    watchers: Vec<(u64, TimerCallback)>,
}

/// Hand-driven [`VisibilityObserver`]. Clones share the same viewport.
#[derive(Clone, Default)]
pub struct ManualViewport {
    viewport: Rc<RefCell<Viewport>>,
}

impl ManualViewport {
    /// Viewport with the element still off screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the host into view, notifying every current watcher once.
    pub fn reveal(&self) {
        let watchers = {
            let mut viewport = self.viewport.borrow_mut();
            viewport.revealed = true;
            std::mem::take(&mut viewport.watchers)
        };
        for (_, on_visible) in watchers {
            on_visible();
        }
    }

    /// Whether [`ManualViewport::reveal`] was called.
    pub fn is_revealed(&self) -> bool {
        self.viewport.borrow().revealed
    }

    /// Watchers still waiting for [`reveal`](Self::reveal).
    pub fn watchers(&self) -> usize {
        self.viewport.borrow().watchers.len()
    }
}

impl VisibilityObserver for ManualViewport {
    fn observe(&self, on_visible: TimerCallback) -> Result<TaskHandle, HostError> {
        // An intersection observer reports the current state right after
        // `observe`, so an already revealed host fires immediately.
        if self.is_revealed() {
            on_visible();
            return Ok(TaskHandle::detached());
        }
        let id = {
            let mut viewport = self.viewport.borrow_mut();
            viewport.next_id += 1;
            let id = viewport.next_id;
            viewport.watchers.push((id, on_visible));
            id
        };
        let viewport = Rc::downgrade(&self.viewport);
        Ok(TaskHandle::new(move || {
            if let Some(viewport) = viewport.upgrade() {
                viewport.borrow_mut().watchers.retain(|(pending, _)| *pending != id);
            }
        }))
    }
}
