//! Host capabilities: frame loop, timers and viewport visibility.
//!
//! Everything the drivers defer goes through a [`Scheduler`] and comes back
//! as a [`TaskHandle`]. Owners keep the handle and cancel it on teardown.

use std::fmt;
use std::time::Duration;

use crate::error::HostError;

/// Host timestamp in milliseconds (`performance.now()` in the browser).
pub type Millis = f64;

/// Frame callback, receives the frame timestamp.
pub type FrameCallback = Box<dyn FnOnce(Millis)>;

/// Deferred callback without arguments.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Cancellation token for a scheduled frame, timer or subscription.
///
/// Dropping the handle cancels the work. Use [`TaskHandle::release`] once the
/// work has already run and there is nothing left to cancel.
#[must_use = "dropping a TaskHandle cancels the scheduled work"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    /// Wrap the host-specific cancel operation.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Cancel the work now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Forget the handle without cancelling.
    pub fn release(mut self) {
        self.cancel = None;
    }

    /// Whether dropping this handle would still cancel something.
    pub fn is_armed(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Frame loop and timer primitives of the host.
///
/// Single-threaded: callbacks run on the same thread that scheduled them,
/// never re-entrantly from inside `request_frame` / `set_timeout`.
pub trait Scheduler {
    /// Current host time.
    fn now(&self) -> Millis;

    /// Run `callback` on the next animation frame.
    fn request_frame(&self, callback: FrameCallback) -> Result<TaskHandle, HostError>;

    /// Run `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback)
    -> Result<TaskHandle, HostError>;
}

/// One-shot "the host element has entered the viewport" signal.
pub trait VisibilityObserver {
    /// Invoke `on_visible` once, the first time the host element intersects
    /// the viewport. The returned handle disconnects the observer.
    fn observe(&self, on_visible: TimerCallback) -> Result<TaskHandle, HostError>;
}
