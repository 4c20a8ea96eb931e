//! Slider configuration: an optional TOML file overlaid by command-line flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::constants::{AUTOPLAY_INTERVAL, SWIPE_THRESHOLD};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub autoplay_interval_secs: f32,
    pub swipe_threshold_px: f32,
    pub controls: ControlsConfig,
    pub captions: Vec<CaptionConfig>,
    pub stats: Vec<StatConfig>,
}

/// Which optional input sources are present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub buttons: bool,
    pub indicators: bool,
    pub swipe: bool,
    pub pause_on_hover: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatConfig {
    pub value: String,
    pub label: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_secs: AUTOPLAY_INTERVAL,
            swipe_threshold_px: SWIPE_THRESHOLD,
            controls: ControlsConfig::default(),
            captions: Vec::new(),
            stats: Vec::new(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            buttons: true,
            indicators: true,
            swipe: true,
            pause_on_hover: true,
        }
    }
}

impl SliderConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// File (when given) first, then command-line overrides.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(interval) = cli.interval {
            config.autoplay_interval_secs = interval;
        }
        if let Some(threshold) = cli.swipe_threshold {
            config.swipe_threshold_px = threshold;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.autoplay_interval_secs.is_finite() || self.autoplay_interval_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "autoplay_interval_secs must be positive, got {}",
                self.autoplay_interval_secs
            )));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "swipe_threshold_px must not be negative, got {}",
                self.swipe_threshold_px
            )));
        }
        Ok(())
    }

    pub fn caption(&self, index: usize) -> Option<&CaptionConfig> {
        self.captions.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = SliderConfig::from_toml("").unwrap();
        assert_eq!(config, SliderConfig::default());
        assert_eq!(config.autoplay_interval_secs, 5.0);
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert!(config.controls.buttons && config.controls.swipe);
    }

    #[test]
    fn parses_full_file() {
        let raw = r#"
            autoplay_interval_secs = 8.0

            [controls]
            buttons = false
            pause_on_hover = false

            [[captions]]
            title = "Latest Smartphones"
            subtitle = "All major brands in stock"

            [[captions]]
            title = "Expert Repairs"

            [[stats]]
            value = "5000+"
            label = "Happy Customers"
        "#;
        let config = SliderConfig::from_toml(raw).unwrap();
        assert_eq!(config.autoplay_interval_secs, 8.0);
        assert!(!config.controls.buttons);
        assert!(config.controls.indicators);
        assert!(!config.controls.pause_on_hover);
        assert_eq!(config.caption(1).map(|c| c.title.as_str()), Some("Expert Repairs"));
        assert_eq!(config.caption(1).map(|c| c.subtitle.as_str()), Some(""));
        assert!(config.caption(2).is_none());
        assert_eq!(config.stats[0].value, "5000+");
    }

    #[test]
    fn rejects_non_positive_interval() {
        let err = SliderConfig::from_toml("autoplay_interval_secs = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = SliderConfig::from_toml("swipe_threshold_px = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SliderConfig::from_toml("autoplay_interval_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn cli_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "autoplay_interval_secs = 8.0\nswipe_threshold_px = 30.0").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from(["hero-slider", "slides", "--config", &path, "--interval", "3"]);
        let config = SliderConfig::resolve(&cli).unwrap();
        assert_eq!(config.autoplay_interval_secs, 3.0);
        assert_eq!(config.swipe_threshold_px, 30.0);
    }

    #[test]
    fn cli_override_is_validated() {
        let cli = Cli::parse_from(["hero-slider", "slides", "--interval", "-2"]);
        assert!(matches!(SliderConfig::resolve(&cli), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let cli = Cli::parse_from(["hero-slider", "slides", "--config", "/nonexistent/slider.toml"]);
        assert!(matches!(SliderConfig::resolve(&cli), Err(ConfigError::Io(_))));
    }
}
