use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single human-readable validation problem.
///
/// An error has no identity beyond its message; two errors with the same
/// message are distinct entries in a report, never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Structured domain failure carrying an ordered, non-empty list of errors.
///
/// This is a control-flow signal, not a crash: `Display` is intentionally
/// empty and no backtrace is captured. Callers inspect the error list.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("")]
pub struct DomainError {
    errors: Vec<ValidationError>,
}

impl DomainError {
    /// Wrap an error list.
    ///
    /// # Panics
    ///
    /// Panics when `errors` is empty: a domain failure without errors has no
    /// meaning, and every consumer relies on the list being non-empty.
    pub fn with(errors: Vec<ValidationError>) -> Self {
        assert!(!errors.is_empty(), "DomainError requires at least one error");
        Self { errors }
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Errors in the order they were raised.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
