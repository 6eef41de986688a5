//! Reference standards for equine colic outcome prediction.
//!
//! - [`reference`]: the 24-field, 89-position schema with clinical baselines
//! - [`lesion`]: the four lesion sub-code tables and the 26-label lesion domain
//!
//! # Example
//!
//! ```rust
//! use colic_standards::{REFERENCE_WIDTH, reference_schema};
//!
//! let schema = reference_schema();
//! assert_eq!(schema.total_width(), REFERENCE_WIDTH);
//! ```

pub mod lesion;
pub mod reference;

pub use lesion::{
    LESION_LABELS, LESION_SITES, LESION_SPECIFIC_CODES, LESION_SUBTYPES, LESION_TYPES,
    LesionTables, LookupTable, NONE_LABEL, lookup,
};
pub use reference::{LESION_FIELD, REFERENCE_WIDTH, reference_fields, reference_schema};
