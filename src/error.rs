//! Error types for propcfg

use crate::kind::ValueKind;
use thiserror::Error;

/// Result type alias for propcfg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for propcfg
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Unknown configuration property: {0}")]
    NotFound(String),

    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: ValueKind,
    },

    #[error("Invalid value for {key}: value failed custom validation")]
    Validation { key: String },

    #[error("Non-finite number cannot be stored: {0}")]
    NonFiniteNumber(f64),

    // -------------------------------------------------------------------------
    // Read Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse configuration value: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Declaration Errors
    // -------------------------------------------------------------------------
    #[error("Unknown value kind: {0}")]
    UnknownKind(String),

    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl Error {
    /// Check if this is an unknown-property error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if the value was rejected for its kind
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if the value was rejected by a custom validator
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if a NaN or infinite number was rejected
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Error::NonFiniteNumber(_))
    }
}
