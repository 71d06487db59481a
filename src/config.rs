//! Runtime configuration for timings, identifiers, and marker classes.
//!
//! Every field has a default, so hosts only pass what they override:
//! `{"toast_duration_ms": 4000}` is a complete config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;
pub const DEFAULT_FLASH_DELAY_MS: u64 = 5000;
pub const DEFAULT_FLASH_FADE_MS: u64 = 300;
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
pub const DEFAULT_OVERLAY_ID: &str = "loading-overlay";
pub const DEFAULT_FLASH_CLASS: &str = "alert";
pub const DEFAULT_TOAST_CLASS: &str = "toast";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Lifetime of a toast before its exit animation starts.
    pub toast_duration_ms: u64,
    /// Exit animation window; the toast node is removed when it ends.
    pub toast_exit_ms: u64,
    /// Delay between the flash scan and the start of each fade.
    pub flash_delay_ms: u64,
    /// Fade window; the flash node is removed when it ends.
    pub flash_fade_ms: u64,
    pub loading_message: String,
    pub overlay_id: String,
    pub flash_class: String,
    pub toast_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            flash_delay_ms: DEFAULT_FLASH_DELAY_MS,
            flash_fade_ms: DEFAULT_FLASH_FADE_MS,
            loading_message: DEFAULT_LOADING_MESSAGE.to_owned(),
            overlay_id: DEFAULT_OVERLAY_ID.to_owned(),
            flash_class: DEFAULT_FLASH_CLASS.to_owned(),
            toast_class: DEFAULT_TOAST_CLASS.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON object, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when [`UiConfig::validate`] rejects the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject identifiers and class names the document could not match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_token("overlay_id", &self.overlay_id)?;
        check_token("flash_class", &self.flash_class)?;
        check_token("toast_class", &self.toast_class)?;
        Ok(())
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    #[must_use]
    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    #[must_use]
    pub fn flash_delay(&self) -> Duration {
        Duration::from_millis(self.flash_delay_ms)
    }

    #[must_use]
    pub fn flash_fade(&self) -> Duration {
        Duration::from_millis(self.flash_fade_ms)
    }
}

fn check_token(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(format!("{field} must not contain whitespace: {value:?}")));
    }
    Ok(())
}
