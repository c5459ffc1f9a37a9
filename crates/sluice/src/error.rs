//! Error types for the Sluice library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sluice operations.
///
/// Variants split into two groups: run-fatal errors ([`Credentials`],
/// [`List`], [`Config`]) that abort a whole transfer, and per-object errors
/// that are caught at the object boundary so the run can continue with the
/// next key. [`SluiceError::is_fatal`] makes the distinction.
///
/// [`Credentials`]: SluiceError::Credentials
/// [`List`]: SluiceError::List
/// [`Config`]: SluiceError::Config
#[derive(Debug, Error)]
pub enum SluiceError {
    /// Ambient credential chain is missing or incomplete.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Enumerating the source bucket failed.
    #[error("Cannot list bucket '{bucket}': {message}")]
    List { bucket: String, message: String },

    /// One object could not be fetched.
    #[error("Cannot fetch '{key}': {message}")]
    Fetch { key: String, message: String },

    /// One object's content is not valid UTF-8 text.
    #[error("Object '{key}' is not UTF-8 text: {source}")]
    Decode {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A data row has fewer fields than the scrub rules reach.
    #[error("Row {row} has {fields} fields, scrub rules need {required}")]
    ShortRow {
        row: usize,
        fields: usize,
        required: usize,
    },

    /// One object could not be written to the destination.
    #[error("Cannot upload '{key}': {message}")]
    Upload { key: String, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading or writing a local file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SluiceError {
    /// Whether this error aborts the whole run rather than one object.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SluiceError::Credentials(_) | SluiceError::List { .. } | SluiceError::Config(_)
        )
    }
}

/// Result type alias for Sluice operations.
pub type Result<T> = std::result::Result<T, SluiceError>;
