//! Error types for portalmap
//!
//! Library code returns [`PortalResult`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for portalmap operations
pub type PortalResult<T> = Result<T, PortalError>;

/// Main error type for portalmap operations
///
/// Every variant is fatal: the run stops at the first error.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Input path does not resolve to a file
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be read
    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input is valid JSON but the top-level value is not an array
    #[error("expected a JSON array at the top level of {path}, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    /// A reference carries `name` but no `id`
    #[error("reference '{name}' at entry {entry}, {field}[{index}] has no 'id'")]
    MissingIdentifier {
        entry: usize,
        field: String,
        index: usize,
        name: String,
    },

    /// A reference `name` is an array or object and cannot be used as a key
    #[error("reference at entry {entry}, {field}[{index}] has a non-scalar 'name'")]
    InvalidName {
        entry: usize,
        field: String,
        index: usize,
    },

    /// Portal map could not be serialized
    #[error("failed to serialize portal map: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file unreadable or invalid
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}
