//! Error types for the Tweetnorm library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TweetnormError`] enum. Note that most failures in a normalization run are
//! *not* errors: missing text passes through every stage untouched, and a stage
//! that cannot handle a record leaves it as it was. Errors are reserved for
//! things that must stop a run before it starts (a missing stop-word file, an
//! invalid pipeline order, an unreadable input file).
//!
//! # Examples
//!
//! ```
//! use tweetnorm::error::{Result, TweetnormError};
//!
//! fn load() -> Result<()> {
//!     Err(TweetnormError::resource("stop-word list 'xx' is not available"))
//! }
//!
//! assert!(load().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tweetnorm operations.
#[derive(Error, Debug)]
pub enum TweetnormError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A linguistic resource (stop words, lexicon) is missing or malformed
    #[error("Resource error: {0}")]
    Resource(String),

    /// Invalid configuration or pipeline composition
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input ingestion errors
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delimited input errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TweetnormError.
pub type Result<T> = std::result::Result<T, TweetnormError>;

impl TweetnormError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Analysis(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Resource(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Config(msg.into())
    }

    /// Create a new ingest error.
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Ingest(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TweetnormError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
