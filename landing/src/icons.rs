//! Inline SVG icons (Feather-style strokes, 24x24).

use leptos::prelude::*;

/// Question-mark circle drawn for unknown icon names.
pub const ICON_FALLBACK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3M12 17h.01";

const ICON_HEXAGON: &str = "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z";
const ICON_LOCK: &str = "M7 11V7a5 5 0 0 1 10 0v4M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z";
const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";
const ICON_TRENDING_UP: &str = "M22 7l-8.5 8.5-5-5L2 17M16 7h6v6";
const ICON_ZAP: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";
const ICON_SHIELD_CHECK: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4";
const ICON_PERCENT: &str = "M19 5L5 19M6.5 9a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5zM17.5 20a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z";
const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3";
const ICON_WALLET: &str = "M21 12V7H5a2 2 0 0 1 0-4h14v4M3 5v14a2 2 0 0 0 2 2h16v-5M18 12a2 2 0 0 0 0 4h4v-4z";
const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";
const ICON_BOOK_OPEN: &str = "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z";
const ICON_ROCKET: &str = "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09zM12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2zM9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5";
const ICON_TWITTER: &str = "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z";
const ICON_GITHUB: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22";
const ICON_MESSAGE_CIRCLE: &str = "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z";
const ICON_EXTERNAL_LINK: &str = "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3";

/// Path data for an icon name; unknown names get [`ICON_FALLBACK`].
pub fn icon_path(name: &str) -> &'static str {
    match name {
        "hexagon" => ICON_HEXAGON,
        "lock" => ICON_LOCK,
        "users" => ICON_USERS,
        "trending-up" => ICON_TRENDING_UP,
        "zap" => ICON_ZAP,
        "shield-check" => ICON_SHIELD_CHECK,
        "percent" => ICON_PERCENT,
        "check-circle" => ICON_CHECK_CIRCLE,
        "wallet" => ICON_WALLET,
        "arrow-right" => ICON_ARROW_RIGHT,
        "book-open" => ICON_BOOK_OPEN,
        "rocket" => ICON_ROCKET,
        "twitter" => ICON_TWITTER,
        "github" => ICON_GITHUB,
        "message-circle" => ICON_MESSAGE_CIRCLE,
        "external-link" => ICON_EXTERNAL_LINK,
        _ => ICON_FALLBACK,
    }
}

/// Renders an icon by name, never failing on unknown names.
///
/// ```rust,ignore
/// view! { <Icon name="wallet" class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// Icon name, e.g. `"trending-up"`
    #[prop(into)]
    name: String,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d=icon_path(&name)></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(icon_path("wallet"), ICON_WALLET);
        assert_eq!(icon_path("trending-up"), ICON_TRENDING_UP);
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(icon_path("dogecoin"), ICON_FALLBACK);
        assert_eq!(icon_path(""), ICON_FALLBACK);
    }
}
