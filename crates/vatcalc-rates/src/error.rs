//! # Rates Error Types
//!
//! Error types for loading, parsing and saving rate configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rates Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   File System   │  │     Format      │  │       Content           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  Parse          │  │  InvalidRate            │ │
//! │  │  ConfigSave...  │  │  Serialize      │  │  DuplicateType          │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for rate configuration operations.
pub type RatesResult<T> = Result<T, RatesError>;

/// Rate configuration error.
#[derive(Debug, Error)]
pub enum RatesError {
    /// Reading or writing the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse rates config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("Failed to serialize rates config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A rate string is not an exact decimal.
    #[error("Invalid rate for '{label}': '{value}' is not a decimal number")]
    InvalidRate { label: String, value: String },

    /// Two type labels are the same once trimmed and lowercased.
    #[error("Duplicate product type '{label}': same as '{existing}' ignoring case and spaces")]
    DuplicateType { label: String, existing: String },

    /// No location to save the config to.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RatesError::InvalidRate {
            label: "Books".to_string(),
            value: "five".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid rate for 'Books': 'five' is not a decimal number"
        );

        let err = RatesError::DuplicateType {
            label: "books".to_string(),
            existing: "Books".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate product type 'books': same as 'Books' ignoring case and spaces"
        );
    }
}
