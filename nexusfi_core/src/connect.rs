//! Simulated wallet connect: a one-shot switch with an auto-dismissing toast.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::schedule::{Scheduler, TaskHandle};

/// How long the "connected" toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Connection lifecycle. `Connected` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial state.
    Disconnected,
    /// Wallet connected.
    Connected,
}

/// UI flags of the connect button and its toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionState {
    connected: bool,
    toast_visible: bool,
}

/// Outcome of [`ConnectionState::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: ConnectionState,
    /// `true` only on the disconnected → connected edge; the caller must
    /// schedule the toast dismissal exactly then.
    pub show_toast: bool,
}

impl ConnectionState {
    /// Whether the wallet is connected.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether the toast is on screen.
    pub fn is_toast_visible(&self) -> bool {
        self.toast_visible
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.connected {
            Phase::Connected
        } else {
            Phase::Disconnected
        }
    }

    /// Fire the user action. Connecting twice changes nothing.
    pub fn connect(self) -> Transition {
        if self.connected {
            return Transition {
                state: self,
                show_toast: false,
            };
        }
        Transition {
            state: Self {
                connected: true,
                toast_visible: true,
            },
            show_toast: true,
        }
    }

    /// Hide the toast, keep the connection.
    pub fn dismiss_toast(self) -> Self {
        Self {
            toast_visible: false,
            ..self
        }
    }
}

/// Drives [`ConnectionState`] and owns the single toast-dismissal timer.
///
/// Clones share the flow. The timer callback holds a weak reference, so a
/// dropped or torn-down flow is never touched again.
#[derive(Clone)]
pub struct ConnectFlow {
    inner: Rc<FlowInner>,
}

struct FlowInner {
    state: Cell<ConnectionState>,
    scheduler: Rc<dyn Scheduler>,
    toast_duration: Duration,
    on_change: Box<dyn Fn(ConnectionState)>,
    dismiss: RefCell<Option<TaskHandle>>,
    torn_down: Cell<bool>,
}

impl ConnectFlow {
    /// Flow with the standard 3 second toast.
    pub fn new(scheduler: Rc<dyn Scheduler>, on_change: impl Fn(ConnectionState) + 'static) -> Self {
        Self::with_toast_duration(scheduler, TOAST_DURATION, on_change)
    }

    /// Flow with a custom toast duration.
    pub fn with_toast_duration(
        scheduler: Rc<dyn Scheduler>,
        toast_duration: Duration,
        on_change: impl Fn(ConnectionState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(FlowInner {
                state: Cell::new(ConnectionState::default()),
                scheduler,
                toast_duration,
                on_change: Box::new(on_change),
                dismiss: RefCell::new(None),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ConnectionState {
        self.inner.state.get()
    }

    /// Whether the dismissal timer is still pending.
    pub fn has_pending_dismissal(&self) -> bool {
        self.inner.dismiss.borrow().is_some()
    }

    /// Handle the "connect" action. Returns `true` if this call connected.
    pub fn connect(&self) -> bool {
        let inner = &self.inner;
        if inner.torn_down.get() {
            return false;
        }

        let transition = inner.state.get().connect();
        if !transition.show_toast {
            return false;
        }

        inner.state.set(transition.state);
        tracing::info!("wallet: connected (simulated)");
        (inner.on_change)(transition.state);
        if inner.torn_down.get() {
            return true;
        }

        let weak: Weak<FlowInner> = Rc::downgrade(inner);
        let scheduled = inner.scheduler.set_timeout(
            inner.toast_duration,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    dismiss(&inner);
                }
            }),
        );

        match scheduled {
            Ok(handle) => *inner.dismiss.borrow_mut() = Some(handle),
            Err(err) => {
                tracing::warn!("wallet: {err}; hiding toast now");
                dismiss(inner);
            }
        }
        true
    }

    /// Whether [`ConnectFlow::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.get()
    }

    /// Cancel the pending dismissal. Idempotent.
    pub fn teardown(&self) {
        if self.inner.torn_down.replace(true) {
            return;
        }
        if let Some(timer) = self.inner.dismiss.borrow_mut().take() {
            tracing::debug!("wallet: teardown with toast still visible");
            timer.cancel();
        }
    }
}

impl Drop for FlowInner {
    fn drop(&mut self) {
        if let Some(timer) = self.dismiss.get_mut().take() {
            timer.cancel();
        }
    }
}

fn dismiss(inner: &Rc<FlowInner>) {
    if let Some(fired) = inner.dismiss.borrow_mut().take() {
        fired.release();
    }
    if inner.torn_down.get() {
        return;
    }
    let state = inner.state.get().dismiss_toast();
    inner.state.set(state);
    tracing::debug!("wallet: toast dismissed");
    (inner.on_change)(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected() {
        let state = ConnectionState::default();
        assert_eq!(state.phase(), Phase::Disconnected);
        assert!(!state.is_toast_visible());
    }

    #[test]
    fn connect_shows_toast_once() {
        let first = ConnectionState::default().connect();
        assert!(first.show_toast);
        assert!(first.state.is_connected());
        assert!(first.state.is_toast_visible());

        let second = first.state.connect();
        assert!(!second.show_toast);
        assert_eq!(second.state, first.state);
    }

    #[test]
    fn connect_after_dismissal_keeps_toast_hidden() {
        let state = ConnectionState::default().connect().state.dismiss_toast();
        let again = state.connect();
        assert!(!again.show_toast);
        assert!(!again.state.is_toast_visible());
        assert_eq!(again.state.phase(), Phase::Connected);
    }
}
