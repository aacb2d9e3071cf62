//! The single error type for the crate.
//!
//! Configuration errors are raised while a pipeline is being composed, before
//! any item is pulled. Per-item failures during generation never reach this
//! type: they are logged and the item is skipped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // === Configuration errors (raised at composition time)
    // =========================================================================
    #[error("Merge needs at least two inputs, got {0}")]
    TooFewInputs(usize),

    #[error("Merge weight for input {index} must be a positive number, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Merge inputs must be all tagged or all untagged (tagged: {tagged:?})")]
    TagMismatch { tagged: Vec<bool> },

    #[error("{operation} expects a tagged sequence, got an untagged one")]
    NotTagged { operation: &'static str },

    #[error("Repeat needs either a number of repeats or a number of items")]
    RepeatModeMissing,

    #[error("Subset stride must be at least 1")]
    ZeroStride,

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    // =========================================================================
    // === Data and I/O errors
    // =========================================================================
    #[error("Could not read '{key}' in namespace '{namespace}': {source}")]
    Read {
        namespace: String,
        key: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Malformed tag path '{text}': {source}")]
    MalformedTag {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for errors raised while composing a pipeline.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::TooFewInputs(_)
                | Error::InvalidWeight { .. }
                | Error::TagMismatch { .. }
                | Error::NotTagged { .. }
                | Error::RepeatModeMissing
                | Error::ZeroStride
                | Error::Regex(_)
        )
    }

    pub(crate) fn read(namespace: &str, key: &str, source: Error) -> Self {
        Error::Read {
            namespace: namespace.to_string(),
            key: key.to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
