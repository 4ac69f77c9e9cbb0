//! Core error types for daycheck-core.
//!
//! This module defines the error hierarchy using thiserror. Flow errors are
//! user-facing (the presentation layer shows them as a notice and lets the
//! user retry); catalog and config errors come from loading files.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::OptionValue;

/// Error returned by operations that load files and print results.
///
/// Flow errors are not part of it: they are recoverable notices that the
/// caller handles on the spot.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Question catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the check-in flow engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Continue was requested before an option was selected.
    #[error("Please select an option for '{question_id}' to continue")]
    MissingAnswer { question_id: String },

    /// The session has no question on screen (finished or empty).
    #[error("No question is active in this session")]
    NoActiveQuestion,

    /// The selected value is not one of the current question's options.
    #[error("Value {value} is not an option for '{question_id}'")]
    InvalidOption {
        question_id: String,
        value: OptionValue,
    },
}

/// Errors raised while building or loading a question catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two questions (main or follow-up) share an id
    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),

    /// A question offers nothing to choose
    #[error("Question '{0}' has no options")]
    NoOptions(String),

    /// Two options of one question carry the same value
    #[error("Question '{question_id}' has duplicate option value {value}")]
    DuplicateOptionValue {
        question_id: String,
        value: OptionValue,
    },

    /// Failed to read a catalog file
    #[error("Failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse catalog TOML
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts_with_context() {
        let err: CoreError = CatalogError::NoOptions("mood".to_string()).into();
        assert!(matches!(err, CoreError::Catalog(_)));
        assert_eq!(err.to_string(), "Catalog error: Question 'mood' has no options");
    }

    #[test]
    fn test_question_mark_lifts_into_core_error() {
        fn missing_key() -> Result<()> {
            let set: std::result::Result<(), ConfigError> =
                Err(ConfigError::UnknownKey("display.colour".to_string()));
            set?;
            Ok(())
        }
        let err = missing_key().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: display.colour"
        );
    }

    #[test]
    fn test_missing_answer_message() {
        let err = FlowError::MissingAnswer {
            question_id: "sleep_quality".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Please select an option for 'sleep_quality' to continue"
        );
    }
}
