use leptos::prelude::*;

use super::page_config;
use crate::hooks::use_wallet;
use crate::icons::Icon;

#[component]
pub fn CallToAction() -> impl IntoView {
    let wallet = use_wallet();
    let brand = page_config().brand.full_name();

    view! {
        <section class="cta">
            <div class="container">
                <div class="cta-card fade-up">
                    <div class="cta-glow"></div>
                    <div class="cta-body">
                        <h2 class="section-title">"Ready to Start Earning?"</h2>
                        <p class="section-description">
                            {format!("Join thousands of users already earning yield on {brand}. ")}
                            "No minimum deposit, withdraw anytime."
                        </p>
                        <div class="cta-actions">
                            <button class="btn btn-primary" on:click=move |_| wallet.connect()>
                                <Icon name="rocket" class="icon-md" />
                                <span>"Launch App"</span>
                            </button>
                            <button class="btn btn-dark">
                                <Icon name="twitter" class="icon-md" />
                                <span>"Follow Updates"</span>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
