//! # nexusfi-core
//!
//! Host-agnostic logic behind the NexusFi landing page.
//!
//! The page itself is declarative Leptos markup. The two pieces with real
//! behavior live here so they can be driven on a virtual clock in tests:
//!
//! - **Animated counters** - a value ramp from 0 to a target, eased with a
//!   quartic ease-out, started once the host element becomes visible and
//!   never replayed ([`counter`]).
//! - **Wallet connect flow** - a one-shot disconnected → connected switch
//!   that shows a toast and hides it again after 3 seconds ([`connect`]).
//!
//! Both drivers talk to the outside world only through the [`Scheduler`]
//! and [`VisibilityObserver`] capabilities. The browser implements them
//! with `requestAnimationFrame`, `setTimeout` and `IntersectionObserver`;
//! [`manual`] implements them on a virtual clock.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use nexusfi_core::{Counter, ManualScheduler, ManualViewport};
//!
//! let scheduler = ManualScheduler::new();
//! let viewport = ManualViewport::new();
//! let counter = Counter::new(Rc::new(scheduler.clone()), 100, 1000, true, |_| {});
//! counter.attach(&viewport);
//!
//! scheduler.frame(16.0);
//! assert_eq!(counter.current(), 0); // still off screen
//!
//! viewport.reveal();
//! scheduler.run_frames(100, 16.0);
//! assert_eq!(counter.current(), 100);
//! ```
//!
//! ## Architecture
//!
//! - [`schedule`] - `Scheduler`, `VisibilityObserver`, cancellable `TaskHandle`
//! - [`counter`] - easing math, `CounterState`, `Counter` driver
//! - [`connect`] - `ConnectionState`, `ConnectFlow` driver
//! - [`manual`] - deterministic host for tests and headless use
//! - [`config`] - page content loaded from TOML
//! - [`format`] - number formatting for stat cards
//! - [`error`] - error types
//!
//! ---
//!
//! Developed with 💀 by The NexusFi Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod connect;
pub mod counter;
pub mod error;
pub mod format;
pub mod manual;
pub mod schedule;

pub use config::LandingConfig;
pub use connect::{ConnectFlow, ConnectionState, Phase, TOAST_DURATION, Transition};
pub use counter::{Counter, CounterState, Tick, ease_out_quart};
pub use error::{ConfigError, HostError};
pub use manual::{ManualScheduler, ManualViewport};
pub use schedule::{Millis, Scheduler, TaskHandle, VisibilityObserver};
