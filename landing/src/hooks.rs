//! Leptos bindings for the core drivers.

use std::rc::Rc;
use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use nexusfi_core::{ConnectFlow, ConnectionState, Counter};
use wasm_bindgen::JsCast;

use crate::runtime::{BrowserScheduler, ElementViewport};

/// Animated counter bound to the element behind the returned `NodeRef`.
///
/// The ramp starts the first time that element scrolls into view (or right
/// away when `gate_on_visibility` is false) and runs once per mount.
pub fn use_animated_counter(
    target: u64,
    duration_ms: u64,
    gate_on_visibility: bool,
) -> (ReadSignal<u64>, NodeRef<Div>) {
    let (count, set_count) = signal(0u64);
    let host = NodeRef::<Div>::new();

    let counter = Counter::new(
        Rc::new(BrowserScheduler),
        target,
        duration_ms,
        gate_on_visibility,
        move |value| set_count.set(value),
    );

    let attached = counter.clone();
    Effect::new(move || {
        if let Some(element) = host.get() {
            let element: web_sys::Element = element.unchecked_into();
            attached.attach(&ElementViewport::new(element));
        }
    });

    let owned = StoredValue::new_local(counter);
    on_cleanup(move || {
        owned.try_with_value(Counter::teardown);
    });

    (count, host)
}

/// Wallet flow shared by every "connect" button on the page.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: ReadSignal<ConnectionState>,
    flow: StoredValue<ConnectFlow, LocalStorage>,
}

impl WalletContext {
    /// Fire the connect action; repeated presses are no-ops.
    pub fn connect(&self) {
        self.flow.try_with_value(|flow| {
            flow.connect();
        });
    }
}

/// Create the wallet flow for this mount and provide it as context.
pub fn provide_wallet(toast_duration: Duration) -> WalletContext {
    let (state, set_state) = signal(ConnectionState::default());
    let flow = ConnectFlow::with_toast_duration(
        Rc::new(BrowserScheduler),
        toast_duration,
        move |next| set_state.set(next),
    );

    let flow = StoredValue::new_local(flow);
    on_cleanup(move || {
        flow.try_with_value(ConnectFlow::teardown);
    });

    let wallet = WalletContext { state, flow };
    provide_context(wallet);
    wallet
}

/// The wallet flow provided by [`provide_wallet`].
pub fn use_wallet() -> WalletContext {
    expect_context::<WalletContext>()
}
