// Landing page sections
// Developed with 💀 by The NexusFi Team (c)2025

use leptos::prelude::*;
use nexusfi_core::LandingConfig;

mod backdrop;
mod cta;
mod features;
mod footer;
mod hero;
mod metrics;
mod nav;
mod stat_card;
mod toast;

pub use backdrop::Backdrop;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use metrics::Metrics;
pub use nav::Nav;
pub use toast::Toast;

/// Page content provided by `App`.
fn page_config() -> LandingConfig {
    use_context::<LandingConfig>().unwrap_or_else(LandingConfig::builtin)
}

/// `"NexusFi"` with the accent part highlighted.
#[component]
fn BrandName(#[prop(default = "brand-name")] class: &'static str) -> impl IntoView {
    let brand = page_config().brand;
    view! {
        <span class=class>
            {brand.name}
            <span class="accent">{brand.accent}</span>
        </span>
    }
}
