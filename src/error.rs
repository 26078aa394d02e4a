//! Error types for the Solace library.
//!
//! All fallible operations in Solace report errors through the [`SolaceError`]
//! enum. Failures are construction-time concerns only: loading or validating a
//! catalog, or building an analysis pipeline. Query-time operations (`reply`,
//! `suggest`, `normalize`) are total and never return an error.
//!
//! # Examples
//!
//! ```
//! use solace::error::{SolaceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SolaceError::catalog("intent group has no patterns"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Solace operations.
///
/// This enum represents all possible errors that can occur in the Solace
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum SolaceError {
    /// I/O errors (catalog files, CLI input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (pipeline construction, filter configuration)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Catalog-related errors (malformed intent groups, invalid QA rows)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SolaceError.
pub type Result<T> = std::result::Result<T, SolaceError>;

impl SolaceError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SolaceError::Analysis(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        SolaceError::Catalog(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SolaceError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = SolaceError::catalog("no responses");
        assert!(matches!(err, SolaceError::Catalog(_)));
        assert_eq!(err.to_string(), "Catalog error: no responses");

        let err = SolaceError::analysis("bad pipeline");
        assert_eq!(err.to_string(), "Analysis error: bad pipeline");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: SolaceError = io_err.into();
        assert!(matches!(err, SolaceError::Io(_)));
    }
}
