use leptos::prelude::*;
use nexusfi_core::config::StatConfig;
use nexusfi_core::format::group_thousands;

use crate::hooks::use_animated_counter;
use crate::icons::Icon;

/// Stat card whose number counts up once the card scrolls into view.
#[component]
pub fn StatCard(
    stat: StatConfig,
    duration_ms: u64,
    gate_on_visibility: bool,
    /// Entrance delay in seconds
    #[prop(default = 0.0)]
    delay: f64,
) -> impl IntoView {
    let (count, host) = use_animated_counter(stat.value, duration_ms, gate_on_visibility);

    view! {
        <div
            node_ref=host
            class="stat-card fade-up"
            style=format!("animation-delay: {delay:.1}s")
        >
            <div class="stat-card-glow"></div>
            <div class="stat-card-body">
                <div class="stat-card-header">
                    <div class="stat-card-icon">
                        <Icon name=stat.icon class="icon-md" />
                    </div>
                    <span class="stat-card-label">{stat.label}</span>
                </div>
                <div class="stat-card-value">
                    <span class="stat-number">{move || group_thousands(count.get())}</span>
                    <span class="stat-suffix">{stat.suffix}</span>
                </div>
            </div>
        </div>
    }
}
