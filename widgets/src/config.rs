//! Site configuration read from an optional JSON block in the page.
//!
//! Every field has a default, so an absent block, an empty object, or a block
//! that sets only a few keys all yield a usable config:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "whatsapp_phone": "+5491100000000", "notify": { "auto_dismiss_ms": 8000 } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FORM_ERROR_MESSAGE, FORM_SUCCESS_MESSAGE, MOBILE_BREAKPOINT_PX, THEME_STORAGE_KEY, WHATSAPP_GREETING,
    WHATSAPP_PHONE,
};
use crate::form::FormMessages;
use crate::notify::NotifyTiming;

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is not valid JSON for [`SiteConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but cannot be used.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub whatsapp_phone: String,
    pub whatsapp_greeting: String,
    pub notify: NotifyTiming,
    pub form_success_message: String,
    pub form_error_message: String,
    pub theme_storage_key: String,
    pub mobile_breakpoint_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_phone: WHATSAPP_PHONE.to_owned(),
            whatsapp_greeting: WHATSAPP_GREETING.to_owned(),
            notify: NotifyTiming::default(),
            form_success_message: FORM_SUCCESS_MESSAGE.to_owned(),
            form_error_message: FORM_ERROR_MESSAGE.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or mistyped fields,
    /// [`ConfigError::Invalid`] for values that parse but cannot be used.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional block, falling back to defaults on any problem.
    #[must_use]
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring site config: {e}");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first unusable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notify.auto_dismiss_ms == 0 {
            return Err(ConfigError::Invalid("notify.auto_dismiss_ms must be positive".into()));
        }
        if self.notify.exit_ms == 0 {
            return Err(ConfigError::Invalid("notify.exit_ms must be positive".into()));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_storage_key must not be empty".into()));
        }
        if self.form_success_message.trim().is_empty() || self.form_error_message.trim().is_empty() {
            return Err(ConfigError::Invalid("form messages must not be empty".into()));
        }
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px < 0.0 {
            return Err(ConfigError::Invalid("mobile_breakpoint_px must be a non-negative number".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn form_messages(&self) -> FormMessages {
        FormMessages { success: self.form_success_message.clone(), error: self.form_error_message.clone() }
    }
}
