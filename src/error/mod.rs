// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cklint.
//!
//! Configuration problems are fatal and surface when a document is compiled
//! into a rule table. Rule violations are never errors; they are reported as
//! findings.

use thiserror::Error;

/// The main error type for cklint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit record errors
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse lint document: {message}")]
    ParseError { message: String },

    #[error("Invalid level for rule '{rule}': {value}")]
    InvalidLevel { rule: String, value: String },

    #[error("Unknown rule: '{rule}'")]
    UnknownRule { rule: String },

    #[error("Unknown preset in extends: '{preset}'")]
    UnknownPreset { preset: String },

    #[error("Rule '{rule}' requires '{field}'")]
    MissingField { rule: String, field: String },

    #[error("Invalid format pattern for rule '{rule}': {message}")]
    InvalidPattern { rule: String, message: String },
}

/// Errors decoding a commit record handed over by an external parser.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to decode commit record: {message}")]
    ParseFailed { message: String },
}

/// Result type alias for cklint operations.
pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_display() {
        let err = ConfigError::InvalidLevel {
            rule: "type-empty".to_string(),
            value: "fatal".to_string(),
        };
        assert!(err.to_string().contains("type-empty"));
        assert!(err.to_string().contains("fatal"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField {
            rule: "type".to_string(),
            field: "options".to_string(),
        };
        assert_eq!(err.to_string(), "Rule 'type' requires 'options'");
    }

    #[test]
    fn test_lint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            preset: "config-angular".to_string(),
        };
        let err: LintError = config_err.into();
        assert!(matches!(err, LintError::Config(_)));
        assert!(err.to_string().contains("config-angular"));
    }
}
