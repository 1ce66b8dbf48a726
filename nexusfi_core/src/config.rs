//! Landing page content that carries numbers: stats, chart, wallet, timing.
//!
//! Parsed from TOML. Every table is optional; missing tables and keys fall
//! back to the built-in page.

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_DURATION_MS;
use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Name and tagline.
    pub brand: BrandConfig,
    /// Stat-card ramp settings.
    pub counter: CounterConfig,
    /// Hero stat cards, in display order.
    pub stats: Vec<StatConfig>,
    /// Simulated wallet.
    pub wallet: WalletConfig,
    /// TVL chart.
    pub chart: ChartConfig,
}

/// Product name, rendered as `name` followed by `accent` in the accent color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Plain part of the brand, e.g. `"Nexus"`.
    pub name: String,
    /// Highlighted part, e.g. `"Fi"`.
    pub accent: String,
    /// Hero headline lead-in.
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Nexus".into(),
            accent: "Fi".into(),
            tagline: "The Future of".into(),
        }
    }
}

impl BrandConfig {
    /// `"NexusFi"`
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name, self.accent)
    }
}

/// Ramp settings shared by every stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Ramp length in milliseconds. `0` jumps straight to the target.
    pub duration_ms: u64,
    /// Wait for the card to scroll into view before counting.
    pub gate_on_visibility: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            gate_on_visibility: true,
        }
    }
}

/// One animated stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    /// Caption above the number.
    pub label: String,
    /// Value the card counts up to.
    pub value: u64,
    /// Unit after the number, e.g. `"M+"`.
    #[serde(default)]
    pub suffix: String,
    /// Icon name; unknown names render a fallback glyph.
    #[serde(default)]
    pub icon: String,
}

impl StatConfig {
    fn new(label: &str, value: u64, suffix: &str, icon: &str) -> Self {
        Self {
            label: label.into(),
            value,
            suffix: suffix.into(),
            icon: icon.into(),
        }
    }
}

/// Simulated wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Shortened address shown on the button once connected.
    pub address_label: String,
    /// Toast text.
    pub toast_message: String,
    /// How long the toast stays visible.
    pub toast_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address_label: "0x7a...3f9".into(),
            toast_message: "Wallet connected successfully!".into(),
            toast_ms: crate::connect::TOAST_DURATION.as_millis() as u64,
        }
    }
}

/// Mocked "total value locked" chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Badge next to the chart title, e.g. `"+127.5%"`.
    pub growth_label: String,
    /// Monthly bars, left to right.
    pub bars: Vec<ChartBar>,
    /// Figures under the chart.
    pub figures: Vec<ChartFigure>,
}

/// Bar height in percent of the chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Axis label.
    pub month: String,
    /// `0..=100`.
    pub height: f64,
}

/// Summary figure under the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFigure {
    /// Caption, e.g. `"TVL"`.
    pub label: String,
    /// Preformatted value.
    pub value: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let bars = [
            ("Jan", 40.0),
            ("Feb", 55.0),
            ("Mar", 45.0),
            ("Apr", 70.0),
            ("May", 60.0),
            ("Jun", 85.0),
            ("Jul", 75.0),
            ("Aug", 95.0),
        ]
        .into_iter()
        .map(|(month, height)| ChartBar {
            month: month.into(),
            height,
        })
        .collect();

        let figures = [("TVL", "$47.2M"), ("Volume (24h)", "$8.4M"), ("Users", "12.5K")]
            .into_iter()
            .map(|(label, value)| ChartFigure {
                label: label.into(),
                value: value.into(),
            })
            .collect();

        Self {
            growth_label: "+127.5%".into(),
            bars,
            figures,
        }
    }
}

/// Stat cards of the built-in page.
pub fn default_stats() -> Vec<StatConfig> {
    vec![
        StatConfig::new("Total Value Locked", 47, "M+", "lock"),
        StatConfig::new("Active Users", 125, "K+", "users"),
        StatConfig::new("Highest APY", 142, "%", "trending-up"),
    ]
}

impl LandingConfig {
    /// The built-in page with its three stat cards.
    pub fn builtin() -> Self {
        Self {
            stats: default_stats(),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// A document without any `[[stats]]` entry keeps the built-in cards.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(source)?;
        if config.stats.is_empty() {
            config.stats = default_stats();
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML, falling back to [`LandingConfig::builtin`] on error.
    pub fn load_or_builtin(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using built-in landing content");
                Self::builtin()
            }
        }
    }

    /// Reject content the page cannot render sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(stat) = self.stats.iter().find(|stat| stat.label.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "stat with value {} has an empty label",
                stat.value
            )));
        }
        if self.wallet.toast_ms == 0 {
            return Err(ConfigError::Invalid("wallet.toast_ms must be positive".into()));
        }
        if self.chart.bars.is_empty() {
            return Err(ConfigError::Invalid("chart has no bars".into()));
        }
        if let Some(bar) = self
            .chart
            .bars
            .iter()
            .find(|bar| !(0.0..=100.0).contains(&bar.height))
        {
            return Err(ConfigError::Invalid(format!(
                "chart bar {} has height {} outside 0..=100",
                bar.month, bar.height
            )));
        }
        Ok(())
    }

    /// Toast duration as a [`std::time::Duration`].
    pub fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.wallet.toast_ms)
    }
}
