//! Browser host for the core drivers: animation frames, timers and
//! `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use nexusfi_core::schedule::{FrameCallback, TimerCallback};
use nexusfi_core::{HostError, Millis, Scheduler, TaskHandle, VisibilityObserver};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// `performance.now()`, or 0 outside a window.
fn performance_now() -> Millis {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `requestAnimationFrame` + `setTimeout` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> Millis {
        performance_now()
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<TaskHandle, HostError> {
        let handle = request_animation_frame_with_handle(move || callback(performance_now()))
            .map_err(|err| HostError::FrameUnavailable(js_message(&err)))?;
        Ok(TaskHandle::new(move || handle.cancel()))
    }

    fn set_timeout(
        &self,
        delay: Duration,
        callback: TimerCallback,
    ) -> Result<TaskHandle, HostError> {
        let handle = set_timeout_with_handle(move || callback(), delay)
            .map_err(|err| HostError::TimerUnavailable(js_message(&err)))?;
        Ok(TaskHandle::new(move || handle.clear()))
    }
}

/// Fires once when `element` first intersects the viewport.
pub struct ElementViewport {
    element: web_sys::Element,
}

impl ElementViewport {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl VisibilityObserver for ElementViewport {
    fn observe(&self, on_visible: TimerCallback) -> Result<TaskHandle, HostError> {
        let pending = Rc::new(RefCell::new(Some(on_visible)));

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !intersecting {
                    return;
                }
                observer.disconnect();
                let on_visible = pending.borrow_mut().take();
                if let Some(on_visible) = on_visible {
                    on_visible();
                }
            },
        );

        let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| HostError::ObserverUnavailable(js_message(&err)))?;
        observer.observe(&self.element);

        // The closure must outlive every observer notification, so the
        // handle owns it and drops it only after disconnecting.
        Ok(TaskHandle::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
