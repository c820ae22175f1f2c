//! Error types for facetr
//!
//! Write-path operations (state transitions, catalog construction, config
//! loading) return these errors. Read-path derivations such as label and
//! count computation never fail and fall back to safe defaults instead.
//!
//! # Error Types
//!
//! - **`InvalidState`**: A transition was attempted from a phase that does not allow it
//!   (toggling with no open dialog, applying while a category page is shown, ...)
//! - **`UnknownCategory`** / **`UnknownValue`**: A write referenced an id that is not in the catalog
//! - **`Configuration`**: A malformed catalog or panel configuration
//! - **`InvalidCommand`**: A command script line the driver cannot parse
//!
//! The remaining variants wrap I/O and parse failures from loading files.

use thiserror::Error;

/// Errors raised by facetr operations
#[derive(Debug, Error)]
pub enum FacetError {
    /// Operation is not valid in the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Category id is not part of the filter catalog
    #[error("Unknown filter category '{0}'")]
    UnknownCategory(String),

    /// Value id is not part of the given category
    #[error("Unknown value '{value}' in filter category '{category}'")]
    UnknownValue { category: String, value: String },

    /// Malformed catalog or configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unparseable line in a panel command script
    #[error("Invalid command on line {line}: {message}")]
    InvalidCommand { line: usize, message: String },

    /// I/O error while reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file loading error
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FacetError {
    /// Shorthand for an `InvalidState` error
    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, FacetError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
