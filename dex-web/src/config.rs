//! # App Configuration
//!
//! Style parameters and display settings, built once at the composition root
//! and passed down explicitly. Nothing here is read through ambient context.
//!
//! ## Overrides
//!
//! A JSON document stored in `localStorage` under
//! [`CONFIG_STORAGE_KEY`](crate::utils::constants::CONFIG_STORAGE_KEY) can
//! override any field. Missing fields keep their defaults:
//!
//! ```text
//! {
//!   "theme": { "border_color": "#444444" },
//!   "balance_precision": 4
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::utils::constants::CONFIG_STORAGE_KEY;

/// Named style parameters read by the components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colour of divider rules and card borders
    pub border_color: String,
    /// Minimum width of the token pill, in pixels
    pub input_token_width: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            border_color: "#dadada".to_string(),
            input_token_width: 100,
        }
    }
}

impl Theme {
    /// CSS length for the token pill's `min-width`.
    pub fn input_token_min_width(&self) -> String {
        format!("{}px", self.input_token_width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    /// Decimals kept when the trade screen formats balances
    pub balance_precision: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: Theme::default(),
            balance_precision: shared::utils::DEFAULT_BALANCE_PRECISION,
        }
    }
}

impl AppConfig {
    /// Parse a JSON override document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.theme.input_token_width == 0 {
            return Err(UiError::Config(
                "theme.input_token_width must be greater than zero".to_string(),
            ));
        }
        if self.balance_precision > 18 {
            return Err(UiError::Config(format!(
                "balance_precision must be at most 18, got {}",
                self.balance_precision
            )));
        }
        Ok(())
    }

    /// Load the stored override, falling back to defaults on any problem.
    pub fn load() -> Self {
        match read_stored_override() {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration override from '{}'", CONFIG_STORAGE_KEY);
                    config
                }
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

fn read_stored_override() -> Result<Option<String>> {
    let window = web_sys::window().ok_or_else(|| UiError::Storage("no window".to_string()))?;
    let storage = window
        .local_storage()
        .map_err(|e| UiError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| UiError::Storage("localStorage disabled".to_string()))?;

    storage
        .get_item(CONFIG_STORAGE_KEY)
        .map_err(|e| UiError::Storage(format!("{:?}", e)))
}
