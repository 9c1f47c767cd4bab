//! Runtime configuration for the page behaviors.
//!
//! Defaults reproduce the fixed timings and messages the pages were built
//! against. A page may override any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="ui-utils-config">
//!   { "report_interval_ms": 60000 }
//! </script>
//! ```
//!
//! ERROR HANDLING
//! ==============
//! A malformed or invalid block never breaks the page: start-up logs a
//! warning and falls back to [`UiConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "ui-utils-config";

/// Largest delay a browser timer accepts (`setTimeout` takes a signed 32-bit value).
pub const MAX_TIMER_MS: u32 = 2_147_483_647;

/// Error returned by [`UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`UiConfig`].
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The config parsed but holds a value the behaviors cannot run with.
    #[error("invalid ui config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// CSS selector matching notification banners.
    pub notification_selector: String,
    /// Delay before a notification starts fading.
    pub hide_after_ms: u32,
    /// Delay between the fade and the element's removal.
    pub fade_out_ms: u32,
    /// Period of the usage reporter.
    pub report_interval_ms: u32,
    /// Exclusive upper bound of the simulated megabytes per tick.
    pub max_usage_mb: f64,
    /// Path prefix for per-session endpoints (`{base}/{session_id}/usage`).
    pub usage_endpoint_base: String,
    /// Alert text shown when a required field is empty.
    pub required_message: String,
    /// Border colour applied to an empty required field.
    pub danger_border: String,
    /// Border colour applied to a filled required field.
    pub normal_border: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_selector: ".alert".to_owned(),
            hide_after_ms: 5000,
            fade_out_ms: 300,
            report_interval_ms: 30_000,
            max_usage_mb: 10.0,
            usage_endpoint_base: "/api/session".to_owned(),
            required_message: "Please fill in all required fields".to_owned(),
            danger_border: "var(--danger-color)".to_owned(),
            normal_border: "var(--border)".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails [`UiConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notification_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("notification_selector is empty".to_owned()));
        }
        if self.report_interval_ms == 0 {
            return Err(ConfigError::Invalid("report_interval_ms must be positive".to_owned()));
        }
        for (name, ms) in [
            ("hide_after_ms", self.hide_after_ms),
            ("fade_out_ms", self.fade_out_ms),
            ("report_interval_ms", self.report_interval_ms),
        ] {
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::Invalid(format!("{name} must be at most {MAX_TIMER_MS}, got {ms}")));
            }
        }
        if !(self.max_usage_mb.is_finite() && self.max_usage_mb > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_usage_mb must be a positive number, got {}",
                self.max_usage_mb
            )));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log_level `{}`", self.log_level)));
        }
        Ok(())
    }

    /// Resolved console log level.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Resolve the effective config from an optional page block.
///
/// An absent block yields defaults. A bad block also yields defaults, plus
/// the error so the caller can report it once logging is up.
#[must_use]
pub fn resolve(raw: Option<&str>) -> (UiConfig, Option<ConfigError>) {
    match raw.map(UiConfig::from_json) {
        None => (UiConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (UiConfig::default(), Some(e)),
    }
}

/// Text of the page's inline config block, if it has a non-blank one.
#[cfg(feature = "browser")]
#[must_use]
pub fn page_block() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|raw| !raw.trim().is_empty())
}

#[cfg(feature = "browser")]
thread_local! {
    static ACTIVE: std::cell::RefCell<std::rc::Rc<UiConfig>> =
        std::cell::RefCell::new(std::rc::Rc::new(UiConfig::default()));
}

/// Install `config` as the active configuration for later JS calls.
#[cfg(feature = "browser")]
pub fn install(config: UiConfig) {
    ACTIVE.with(|active| *active.borrow_mut() = std::rc::Rc::new(config));
}

/// The active configuration.
#[cfg(feature = "browser")]
#[must_use]
pub fn current() -> std::rc::Rc<UiConfig> {
    ACTIVE.with(|active| std::rc::Rc::clone(&active.borrow()))
}
