//! Error types for the woordlijst library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WoordlijstError`] enum.
//!
//! # Examples
//!
//! ```
//! use woordlijst::error::{Result, WoordlijstError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WoordlijstError::invalid_config("probe word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for woordlijst operations.
#[derive(Error, Debug)]
pub enum WoordlijstError {
    /// The source table could not be opened or read.
    #[error("Source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O errors (writing the artifact, reading a generated dictionary, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors, including invalid UTF-8 in the source table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid builder or command configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A requested word or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WoordlijstError.
pub type Result<T> = std::result::Result<T, WoordlijstError>;

impl WoordlijstError {
    /// Create a source-unavailable error for the given path.
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        WoordlijstError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WoordlijstError::InvalidConfig(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WoordlijstError::NotFound(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WoordlijstError::Other(msg.into())
    }
}
