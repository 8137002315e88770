use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Two presses within this duration may form a double click.
pub const DOUBLE_CLICK_MAX_INTERVAL: Duration = Duration::from_millis(600);
/// A press held longer than this becomes a long press.
pub const LONG_PRESS_START: Duration = Duration::from_millis(500);
/// Default maximum distance in pixels between the two presses of a double click.
pub const DEFAULT_DOUBLE_CLICK_THRESHOLD: f64 = 16.0;

/// Gesture recognition parameters.
///
/// Durations are in seconds so that they can be written as plain numbers in TOML:
///
/// ```toml
/// double_click_threshold = 24.0
/// long_press_start = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    double_click_threshold: f64,
    double_click_interval: f64,
    long_press_start: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_click_threshold: DEFAULT_DOUBLE_CLICK_THRESHOLD,
            double_click_interval: DOUBLE_CLICK_MAX_INTERVAL.as_secs_f64(),
            long_press_start: LONG_PRESS_START.as_secs_f64(),
        }
    }
}

impl GestureConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml).context("Failed to parse gesture configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_double_click_threshold(mut self, threshold: f64) -> Self {
        self.double_click_threshold = threshold;
        self
    }

    pub fn with_double_click_interval(mut self, interval: Duration) -> Self {
        self.double_click_interval = interval.as_secs_f64();
        self
    }

    pub fn with_long_press_start(mut self, start: Duration) -> Self {
        self.long_press_start = start.as_secs_f64();
        self
    }

    /// Pixels. A non-positive threshold never matches.
    pub fn double_click_threshold(&self) -> f64 {
        self.double_click_threshold
    }

    pub fn double_click_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.double_click_interval).unwrap_or(DOUBLE_CLICK_MAX_INTERVAL)
    }

    pub fn long_press_start(&self) -> Duration {
        Duration::try_from_secs_f64(self.long_press_start).unwrap_or(LONG_PRESS_START)
    }

    fn validate(&self) -> Result<()> {
        for (name, secs) in [
            ("double_click_interval", self.double_click_interval),
            ("long_press_start", self.long_press_start),
        ] {
            if Duration::try_from_secs_f64(secs).is_err() {
                bail!("`{name}` must be a non-negative number of seconds, got {secs}");
            }
        }
        Ok(())
    }
}
