//! Feature encoding for equine colic outcome prediction.
//!
//! - [`encoder`]: record to fixed-width vector, with soft diagnostics
//! - [`lesion`]: packed lesion code to four labels
//! - [`input`]: `key: value` text and JSON record parsing
//! - [`classifier`], [`linear`], [`predict`]: the classifier boundary, a JSON
//!   linear model, and the facade that ties encoding to classification
//!
//! # Example
//!
//! ```rust
//! use colic_encode::{Encoder, parse_record};
//!
//! let record = parse_record("pulse: 88, pain: depressed, lesion_1: 2209").unwrap();
//! let encoded = Encoder::reference().encode(&record);
//! assert_eq!(encoded.values.len(), 89);
//! ```

pub mod classifier;
pub mod encoder;
pub mod error;
pub mod input;
pub mod lesion;
pub mod linear;
pub mod predict;

pub use classifier::Classifier;
pub use encoder::{Encoded, Encoder, EncoderOptions, MissingValuePolicy};
pub use error::{ClassifierError, ParseError, PredictError};
pub use input::{parse_json_records, parse_record};
pub use lesion::{DecodedLesion, LesionCodeDecoder};
pub use linear::LinearClassifier;
pub use predict::{Prediction, Predictor};
