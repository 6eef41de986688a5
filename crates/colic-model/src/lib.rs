//! Data model for equine colic outcome prediction.
//!
//! Holds the types shared by the encoder and its callers: the ordered
//! [`FeatureSchema`], raw input [`Record`]s, soft [`EncodeIssue`] diagnostics
//! and the [`Outcome`] classes a classifier predicts.

pub mod diagnostics;
pub mod error;
pub mod outcome;
pub mod record;
pub mod schema;

pub use diagnostics::{EncodeIssue, IssueCounts, IssueKind};
pub use error::{Result, SchemaError};
pub use outcome::Outcome;
pub use record::{RawValue, Record};
pub use schema::{FeatureDomain, FeatureSchema, FieldSpec, SchemaOverview};
