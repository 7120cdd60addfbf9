//! # Error Types
//!
//! Components never fail; only the configuration layer around them can.
//! [`UiError`] covers those cases and is always recovered from by falling
//! back to defaults.

use thiserror::Error;

/// Convenience alias used by the configuration layer.
pub type Result<T> = std::result::Result<T, UiError>;

/// Errors raised while preparing the app, before any component renders.
#[derive(Debug, Error)]
pub enum UiError {
    /// Stored configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Browser storage was unavailable or refused access
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}
