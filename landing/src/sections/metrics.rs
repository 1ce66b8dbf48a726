use leptos::prelude::*;
use nexusfi_core::config::{ChartBar, ChartConfig};

use super::page_config;
use crate::icons::Icon;

const HIGHLIGHTS: &[&str] = &[
    "Real-time yield tracking",
    "Transparent fee structure",
    "On-chain verifiable reserves",
];

/// Inline style of one chart bar: grows to `height`% with a staggered delay.
fn bar_style(bar: &ChartBar, index: usize) -> String {
    format!(
        "height: {}%; animation-delay: {:.1}s",
        bar.height,
        index as f64 * 0.1
    )
}

#[component]
pub fn Metrics() -> impl IntoView {
    let chart = page_config().chart;

    view! {
        <section id="stats" class="metrics">
            <div class="container">
                <div class="metrics-grid">
                    <div class="metrics-copy fade-up">
                        <h2 class="section-title">
                            "Protocol "
                            <span class="gradient-text">"Metrics"</span>
                        </h2>
                        <p class="section-description">
                            "Track real-time protocol performance. Our transparent dashboard shows "
                            "exactly where your yields come from and how the protocol grows over time."
                        </p>
                        <ul class="highlights">
                            {HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(index, text)| {
                                    view! {
                                        <li
                                            class="highlight fade-in"
                                            style=format!("animation-delay: {:.1}s", index as f64 * 0.1)
                                        >
                                            <Icon name="check-circle" class="icon-md accent" />
                                            <span>{*text}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <button class="btn btn-outline">
                            <span>"View Full Analytics"</span>
                            <Icon name="external-link" class="icon-sm" />
                        </button>
                    </div>
                    <TvlChart chart=chart />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TvlChart(chart: ChartConfig) -> impl IntoView {
    view! {
        <div class="chart-card fade-up">
            <div class="chart-header">
                <div>
                    <h3 class="chart-title">"Total Value Locked"</h3>
                    <p class="chart-subtitle">"Protocol growth over time"</p>
                </div>
                <div class="chart-growth">
                    <Icon name="trending-up" class="icon-sm" />
                    <span>{chart.growth_label}</span>
                </div>
            </div>

            <div class="chart-bars">
                {chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(index, bar)| {
                        view! {
                            <div class="chart-bar" style=bar_style(bar, index)>
                                <div class="chart-bar-fill"></div>
                                <div class="chart-bar-label">{bar.month.clone()}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-figures">
                {chart
                    .figures
                    .into_iter()
                    .map(|figure| {
                        view! {
                            <div class="chart-figure">
                                <p class="chart-figure-label">{figure.label}</p>
                                <p class="chart-figure-value">{figure.value}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
