//! Page content shipped with the bundle.

use nexusfi_core::LandingConfig;

const LANDING_TOML: &str = include_str!("../landing.toml");

/// Content from `landing.toml`, or the built-in page if it is broken.
pub fn load() -> LandingConfig {
    LandingConfig::load_or_builtin(LANDING_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_content_parses() {
        let config = LandingConfig::from_toml_str(LANDING_TOML).expect("landing.toml is valid");
        assert_eq!(config, LandingConfig::builtin());
    }
}
