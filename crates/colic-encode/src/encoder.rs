//! Record to feature vector encoding.
//!
//! The encoder walks the schema in order and appends one segment per field:
//!
//! | field state          | segment                          | issue                 |
//! |----------------------|----------------------------------|-----------------------|
//! | absent               | missing-value segment (policy)   | `MissingValue`        |
//! | numeric, parses      | the number                       |                       |
//! | numeric, unparsable  | `0.0`                            | `InvalidNumber`       |
//! | categorical, known   | one-hot                          |                       |
//! | categorical, unknown | all zeros                        | `UnknownCategory`     |
//! | lesion               | union of the four decoded labels | `UnknownLesionCode` when nothing matched |
//!
//! Encoding never fails on user input. Issues are returned next to the vector
//! and also emitted as `debug` events without the raw value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use colic_model::{EncodeIssue, FeatureDomain, FeatureSchema, FieldSpec, IssueKind, RawValue, Record};
use colic_standards::reference_schema;

use crate::lesion::LesionCodeDecoder;

/// What to write for a field that is absent from the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// The field's clinical baseline from the schema.
    #[default]
    ClinicalDefault,
    /// An all-zero segment.
    Zeros,
}

/// Encoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderOptions {
    pub missing: MissingValuePolicy,
}

impl EncoderOptions {
    #[must_use]
    pub fn with_missing(mut self, missing: MissingValuePolicy) -> Self {
        self.missing = missing;
        self
    }
}

/// An encoded record and the soft issues found while encoding it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoded {
    pub values: Vec<f64>,
    pub issues: Vec<EncodeIssue>,
}

impl Encoded {
    /// True when every field was present and usable.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Turns records into fixed-width vectors for one schema.
///
/// Holds only read-only state, so a single encoder can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Encoder<'s> {
    schema: &'s FeatureSchema,
    decoder: LesionCodeDecoder,
    options: EncoderOptions,
}

impl Encoder<'static> {
    /// Encoder for the reference schema and lesion tables.
    pub fn reference() -> Self {
        Self::new(reference_schema())
    }
}

impl<'s> Encoder<'s> {
    pub fn new(schema: &'s FeatureSchema) -> Self {
        Self {
            schema,
            decoder: LesionCodeDecoder::default(),
            options: EncoderOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: EncoderOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: LesionCodeDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn schema(&self) -> &'s FeatureSchema {
        self.schema
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    pub fn decoder(&self) -> &LesionCodeDecoder {
        &self.decoder
    }

    /// Encode one record.
    ///
    /// # Panics
    ///
    /// Panics if the produced vector is not `schema.total_width()` long,
    /// which only a broken schema definition can cause.
    pub fn encode(&self, record: &Record) -> Encoded {
        let mut values = Vec::with_capacity(self.schema.total_width());
        let mut issues = Vec::new();

        for field in self.schema.fields() {
            let issue = match record.get(&field.name) {
                None => {
                    self.push_missing(field, &mut values);
                    Some(EncodeIssue::missing(&field.name))
                }
                Some(raw) => match &field.domain {
                    FeatureDomain::Numeric => push_numeric(field, raw, &mut values),
                    FeatureDomain::Categorical(_) => push_categorical(field, raw, &mut values),
                    FeatureDomain::Lesion(_) => self.push_lesion(field, raw, &mut values),
                },
            };
            if let Some(issue) = issue {
                debug!(field = %issue.field, kind = %issue.kind, "{}", issue.kind.describe());
                issues.push(issue);
            }
        }

        assert_eq!(
            values.len(),
            self.schema.total_width(),
            "encoded vector width does not match the schema"
        );
        Encoded { values, issues }
    }

    /// Encode records in order.
    pub fn encode_many(&self, records: &[Record]) -> Vec<Encoded> {
        records.iter().map(|record| self.encode(record)).collect()
    }

    fn push_missing(&self, field: &FieldSpec, values: &mut Vec<f64>) {
        match self.options.missing {
            MissingValuePolicy::ClinicalDefault => values.extend_from_slice(&field.default),
            MissingValuePolicy::Zeros => values.resize(values.len() + field.width(), 0.0),
        }
    }

    fn push_lesion(
        &self,
        field: &FieldSpec,
        raw: &RawValue,
        values: &mut Vec<f64>,
    ) -> Option<EncodeIssue> {
        let code = raw.as_text();
        let decoded = self.decoder.decode(&code);
        let start = values.len();
        values.resize(start + field.width(), 0.0);

        let mut matched = false;
        for label in decoded.labels() {
            if let Some(position) = field.domain.position(label) {
                values[start + position] = 1.0;
                matched = true;
            }
        }
        (!matched).then(|| EncodeIssue::rejected(&field.name, IssueKind::UnknownLesionCode, code))
    }
}

fn push_numeric(field: &FieldSpec, raw: &RawValue, values: &mut Vec<f64>) -> Option<EncodeIssue> {
    match raw.as_f64() {
        Some(number) => {
            values.push(number);
            None
        }
        None => {
            values.resize(values.len() + field.width(), 0.0);
            Some(EncodeIssue::rejected(
                &field.name,
                IssueKind::InvalidNumber,
                raw.as_text(),
            ))
        }
    }
}

fn push_categorical(
    field: &FieldSpec,
    raw: &RawValue,
    values: &mut Vec<f64>,
) -> Option<EncodeIssue> {
    let text = raw.as_text();
    let start = values.len();
    values.resize(start + field.width(), 0.0);
    match field.domain.position(&text) {
        Some(position) => {
            values[start + position] = 1.0;
            None
        }
        None => Some(EncodeIssue::rejected(
            &field.name,
            IssueKind::UnknownCategory,
            text,
        )),
    }
}
