//! Error types for record parsing, classification and prediction.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed record input. Raised before anything reaches the encoder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A `key: value` pair without the `:` separator.
    #[error("pair {position} has no ':' separator: '{pair}'")]
    MissingSeparator { position: usize, pair: String },

    /// A pair whose key is blank.
    #[error("pair {position} has an empty key")]
    EmptyKey { position: usize },

    /// The same key given twice in one record.
    #[error("key '{key}' is given more than once")]
    DuplicateKey { key: String },

    /// JSON input that is neither a record object nor an array of them.
    #[error("invalid JSON records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures inside a classifier or while loading one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassifierError {
    /// Model file could not be read.
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model file is not valid JSON for the expected layout.
    #[error("failed to parse model: {0}")]
    Format(#[from] serde_json::Error),

    /// Parameters or inputs do not have matching dimensions.
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    Shape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Failures of the prediction facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// Classifier returned a class index with no outcome.
    #[error("classifier returned unknown class index {0}")]
    UnknownClass(usize),

    /// Classifier returned a different number of rows than it was given.
    #[error("classifier returned {actual} {what} for {expected} records")]
    BatchSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A probability row too narrow to hold the predicted class.
    #[error("classifier returned a probability row of width {actual}, needs at least {expected}")]
    ProbabilityWidth { expected: usize, actual: usize },
}
