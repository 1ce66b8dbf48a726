// NexusFi Landing Page — Leptos 0.8 Edition
// Developed with 💀 by The NexusFi Team (c)2025

mod content;
mod hooks;
mod icons;
mod runtime;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    tracing::info!("nexusfi landing: mounting to body");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = content::load();
    hooks::provide_wallet(config.toast_duration());
    provide_context(config);

    view! {
        <div class="page">
            <Backdrop />
            <Toast />
            <Nav />
            <main>
                <Hero />
                <Features />
                <Metrics />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
