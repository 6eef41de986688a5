//! Error types for schema construction.

use thiserror::Error;

/// Errors raised while building a [`FeatureSchema`](crate::FeatureSchema).
///
/// All of these are definition mistakes, never user input problems.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields share a name.
    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },

    /// A categorical or lesion domain declares no labels.
    #[error("field '{name}' has an empty value domain")]
    EmptyDomain { name: String },

    /// A label appears twice inside one domain.
    #[error("field '{name}' repeats the label '{label}'")]
    DuplicateLabel { name: String, label: String },

    /// The default segment does not cover the domain.
    #[error("field '{name}' default has width {actual}, domain width is {expected}")]
    DefaultWidth {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Only one lesion field may exist per schema.
    #[error("field '{name}' is a second lesion field (first is '{first}')")]
    MultipleLesionFields { name: String, first: String },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
