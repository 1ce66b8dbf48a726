use leptos::prelude::*;
use nexusfi_core::ConnectionState;

use super::{BrandName, page_config};
use crate::hooks::use_wallet;
use crate::icons::Icon;

const NAV_ITEMS: &[&str] = &["Features", "Stats", "Docs"];

/// Anchor id of the section a nav item scrolls to.
fn section_id(item: &str) -> String {
    item.to_lowercase()
}

/// Smooth-scroll to `#id`; missing sections are ignored.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => tracing::debug!("nav: no section #{id} on this page"),
    }
}

/// Text on the connect button.
fn connect_label(state: ConnectionState, address_label: &str) -> String {
    if state.is_connected() {
        address_label.to_string()
    } else {
        "Connect Wallet".to_string()
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <nav class="nav">
                    <div class="nav-brand">
                        <div class="brand-mark">
                            <Icon name="hexagon" class="icon-lg" />
                        </div>
                        <BrandName />
                    </div>

                    <div class="nav-links">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = section_id(item);
                                view! {
                                    <button class="nav-link" on:click=move |_| scroll_to_section(&id)>
                                        {*item}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <ConnectButton />
                </nav>
            </div>
        </header>
    }
}

#[component]
fn ConnectButton() -> impl IntoView {
    let wallet = use_wallet();
    let address_label = page_config().wallet.address_label;
    let (hovered, set_hovered) = signal(false);

    let connected = move || wallet.state.get().is_connected();

    view! {
        <button
            class=move || if connected() { "connect-btn connected" } else { "connect-btn" }
            on:click=move |_| wallet.connect()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <span class="connect-btn-inner">
                {move || {
                    let icon = if connected() { "check-circle" } else { "wallet" };
                    view! { <Icon name=icon class="icon-sm" /> }
                }}
                <span>{move || connect_label(wallet.state.get(), &address_label)}</span>
            </span>
            <Show when=move || !connected() && hovered.get()>
                <div class="connect-btn-shimmer"></div>
            </Show>
        </button>
    }
}
