use leptos::prelude::*;

use super::{BrandName, page_config};
use crate::icons::Icon;

const SOCIALS: &[(&str, &str)] = &[
    ("twitter", "#"),
    ("github", "#"),
    ("message-circle", "#"),
    ("book-open", "#"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!(
        "© 2024 {}. All rights reserved.",
        page_config().brand.full_name()
    );

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <div class="brand-mark brand-mark-sm">
                            <Icon name="hexagon" class="icon-md" />
                        </div>
                        <BrandName class="brand-name footer-title" />
                    </div>
                    <div class="footer-links">
                        {SOCIALS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a href=*href class="footer-link" aria-label=*name>
                                        <Icon name=*name class="icon-md" />
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="footer-copyright">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
