//! Error types for jobpost-extract.
//!
//! Extraction itself never fails; these errors cover the edges around it:
//! building custom vocabularies, reading input, and serializing output.

/// Error type for operations around extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A class-word vocabulary could not be compiled into a pattern.
    #[error("Invalid vocabulary pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading input or writing output failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a result or payload failed.
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A host-side click on an expand control could not be dispatched.
    #[error("Click failed: {0}")]
    Click(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
