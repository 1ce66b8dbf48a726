use leptos::prelude::*;

use super::page_config;
use super::stat_card::StatCard;
use crate::hooks::use_wallet;
use crate::icons::Icon;

#[component]
pub fn Hero() -> impl IntoView {
    let config = page_config();
    let wallet = use_wallet();
    let counter = config.counter;

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge fade-up">
                        <span class="hero-badge-dot"></span>
                        "Live on Mainnet"
                    </div>
                    <h1 class="hero-title fade-up">
                        {config.brand.tagline}
                        " "
                        <span class="gradient-text">"DeFi"</span>
                    </h1>
                    <p class="hero-description fade-up">
                        "Earn competitive yields, trade with minimal slippage, and secure your assets "
                        "with institutional-grade security. All in one decentralized protocol."
                    </p>
                    <div class="hero-actions fade-up">
                        <button class="btn btn-primary" on:click=move |_| wallet.connect()>
                            <span>"Launch App"</span>
                            <Icon name="arrow-right" class="icon-md" />
                        </button>
                        <button class="btn btn-secondary">
                            <Icon name="book-open" class="icon-md" />
                            <span>"Read Docs"</span>
                        </button>
                    </div>
                </div>

                <div class="stats-grid fade-up">
                    {config
                        .stats
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <StatCard
                                    stat=stat
                                    duration_ms=counter.duration_ms
                                    gate_on_visibility=counter.gate_on_visibility
                                    delay=index as f64 * 0.1
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
