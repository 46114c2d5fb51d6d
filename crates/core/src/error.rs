//! Error types for the stock feed.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stock feed.
#[derive(Error, Debug)]
pub enum Error {
    /// A field required to process the record is absent or empty.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Date or time text does not match the expected strict format.
    #[error("Format error: {0}")]
    Format(String),

    /// No input source locator was supplied.
    #[error("No input source given")]
    EmptySource,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The delimited reader could not produce a record.
    #[error("Read error: {0}")]
    Read(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Create a format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Error::Read(msg.into())
    }
}
