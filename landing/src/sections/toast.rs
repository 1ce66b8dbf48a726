use leptos::prelude::*;

use super::page_config;
use crate::hooks::use_wallet;
use crate::icons::Icon;

/// "Wallet connected" notification, visible while the flow says so.
#[component]
pub fn Toast() -> impl IntoView {
    let wallet = use_wallet();
    let message = page_config().wallet.toast_message;

    view! {
        <Show when=move || wallet.state.get().is_toast_visible()>
            <div class="toast" role="status">
                <Icon name="check-circle" class="icon-md" />
                <span class="toast-message">{message.clone()}</span>
            </div>
        </Show>
    }
}
