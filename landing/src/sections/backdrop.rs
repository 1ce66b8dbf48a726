use leptos::prelude::*;

#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="glow glow-cyan"></div>
            <div class="glow glow-purple"></div>
            <div class="glow glow-bottom"></div>
        </div>
    }
}
