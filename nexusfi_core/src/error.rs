//! Error types for host capabilities and page configuration.

use thiserror::Error;

/// A host capability (frame loop, timer, viewport observer) refused a request.
///
/// The drivers absorb these: a counter snaps to its target, a toast is
/// dismissed right away. They are surfaced so hosts can log them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// `requestAnimationFrame` (or its stand-in) could not be registered.
    #[error("animation frame unavailable: {0}")]
    FrameUnavailable(String),

    /// `setTimeout` (or its stand-in) could not be registered.
    #[error("timer unavailable: {0}")]
    TimerUnavailable(String),

    /// The viewport intersection observer could not be created.
    #[error("visibility observer unavailable: {0}")]
    ObserverUnavailable(String),
}

/// Landing page configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document did not parse into a [`crate::LandingConfig`].
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but describes an impossible page.
    #[error("invalid landing config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_messages_carry_the_host_reason() {
        let err = HostError::TimerUnavailable("no window".into());
        assert_eq!(err.to_string(), "timer unavailable: no window");
    }

    #[test]
    fn invalid_config_message() {
        let err = ConfigError::Invalid("chart has no bars".into());
        assert_eq!(err.to_string(), "invalid landing config: chart has no bars");
    }
}
