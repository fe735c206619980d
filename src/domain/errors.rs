//! Domain error types
//!
//! These errors are framework-agnostic and represent failures of the layers
//! around the call number core. The core itself never fails.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound(String),
    /// Validation error with message
    Validation(String),
    /// File system error
    Io(String),
    /// Malformed tabular input or output
    Csv(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(what) => write!(f, "Not found: {}", what),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::Csv(msg) => write!(f, "CSV error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}

// Conversion from CSV errors (used by import and export)
impl From<csv::Error> for DomainError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => DomainError::Io(e.to_string()),
            _ => DomainError::Csv(e.to_string()),
        }
    }
}
