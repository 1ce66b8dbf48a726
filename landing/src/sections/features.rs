use leptos::prelude::*;

use super::BrandName;
use crate::icons::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header fade-up">
                    <h2 class="section-title">
                        "Why Choose "
                        <BrandName class="gradient-text" />
                    </h2>
                    <p class="section-description">
                        "Built for performance, security, and maximum returns"
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="zap"
                        title="Low Fees"
                        description="Industry-leading low transaction fees starting at 0.1%. Maximize your returns with minimal cost on every trade and yield harvest."
                    />
                    <FeatureCard
                        icon="shield-check"
                        title="Security First"
                        description="Multi-sig governance, audited smart contracts, and real-time monitoring. Your assets are protected by institutional-grade security."
                        delay=0.1
                    />
                    <FeatureCard
                        icon="percent"
                        title="Competitive APY"
                        description="Earn up to 142% APY on staked assets with auto-compounding yield strategies. Real yields, no inflationary gimmicks."
                        delay=0.2
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(default = 0.0)] delay: f64,
) -> impl IntoView {
    view! {
        <article class="feature-card fade-up" style=format!("animation-delay: {delay:.1}s")>
            <div class="feature-card-glow"></div>
            <div class="feature-icon">
                <Icon name=icon class="icon-lg" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
