//! Feature schema.
//!
//! A [`FeatureSchema`] is the ordered list of fields that fixes the layout of
//! every encoded vector. Field order, and the label order inside each domain,
//! is a contract with the trained classifier and must not change once a model
//! has been fitted against it.
//!
//! # Segment widths
//!
//! | domain          | width              |
//! |-----------------|--------------------|
//! | `Numeric`       | 1                  |
//! | `Categorical`   | number of labels   |
//! | `Lesion`        | number of labels   |

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Result, SchemaError};

/// Labels that mark a categorical field as a yes/no flag.
const BINARY_LABELS: [&str; 2] = ["no", "yes"];

/// Value space of a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum FeatureDomain {
    /// A single floating point value.
    Numeric,
    /// One-hot over an ordered list of labels.
    Categorical(Vec<String>),
    /// Union membership over the labels decoded from a lesion code.
    Lesion(Vec<String>),
}

impl FeatureDomain {
    /// Build a categorical domain from an ordered label list.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// Build a lesion domain from an ordered label list.
    pub fn lesion<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lesion(values.into_iter().map(Into::into).collect())
    }

    /// Number of vector positions this domain occupies.
    pub fn width(&self) -> usize {
        match self {
            FeatureDomain::Numeric => 1,
            FeatureDomain::Categorical(values) | FeatureDomain::Lesion(values) => values.len(),
        }
    }

    /// Declared labels, empty for numeric fields.
    pub fn values(&self) -> &[String] {
        match self {
            FeatureDomain::Numeric => &[],
            FeatureDomain::Categorical(values) | FeatureDomain::Lesion(values) => values,
        }
    }

    /// Position of `label` inside the domain.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.values().iter().position(|value| value == label)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FeatureDomain::Numeric)
    }

    pub fn is_lesion(&self) -> bool {
        matches!(self, FeatureDomain::Lesion(_))
    }

    /// True for a categorical domain made only of `no`/`yes`.
    pub fn is_binary(&self) -> bool {
        match self {
            FeatureDomain::Categorical(values) => {
                values.len() == BINARY_LABELS.len()
                    && values
                        .iter()
                        .all(|value| BINARY_LABELS.contains(&value.as_str()))
            }
            _ => false,
        }
    }
}

/// One field of the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name as it appears in input records.
    pub name: String,
    /// Value space and encoding rule.
    pub domain: FeatureDomain,
    /// Segment substituted when the field is absent (the clinical baseline).
    /// `NaN` entries mean "no baseline" and reach the classifier as missing.
    pub default: Vec<f64>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, domain: FeatureDomain, default: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            domain,
            default,
        }
    }

    pub fn width(&self) -> usize {
        self.domain.width()
    }
}

/// Ordered, immutable field list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSchema {
    fields: Vec<FieldSpec>,
    offsets: Vec<usize>,
    total_width: usize,
}

impl FeatureSchema {
    /// Validate and freeze a field list.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when names repeat, a domain is empty or
    /// repeats a label, a default segment has the wrong width, or more than
    /// one lesion field is declared.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut names = BTreeSet::new();
        let mut lesion_field: Option<&str> = None;
        for field in &fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
            if !field.domain.is_numeric() {
                check_labels(&field.name, field.domain.values())?;
            }
            if field.default.len() != field.width() {
                return Err(SchemaError::DefaultWidth {
                    name: field.name.clone(),
                    expected: field.width(),
                    actual: field.default.len(),
                });
            }
            if field.domain.is_lesion() {
                if let Some(first) = lesion_field {
                    return Err(SchemaError::MultipleLesionFields {
                        name: field.name.clone(),
                        first: first.to_string(),
                    });
                }
                lesion_field = Some(&field.name);
            }
        }

        let mut offsets = Vec::with_capacity(fields.len());
        let mut total_width = 0;
        for field in &fields {
            offsets.push(total_width);
            total_width += field.width();
        }

        Ok(Self {
            fields,
            offsets,
            total_width,
        })
    }

    /// Fields in encoding order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Length of every encoded vector.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Start index of a field's segment in the encoded vector.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .map(|index| self.offsets[index])
    }

    /// Concatenation of every field's default segment.
    pub fn default_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.total_width);
        for field in &self.fields {
            row.extend_from_slice(&field.default);
        }
        row
    }

    /// The lesion field, if the schema declares one.
    pub fn lesion_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.domain.is_lesion())
    }

    /// Full lesion label list, for a dedicated help query.
    pub fn lesion_values(&self) -> Option<&[String]> {
        self.lesion_field().map(|field| field.domain.values())
    }

    /// Grouped description of the schema for help text.
    pub fn overview(&self) -> SchemaOverview<'_> {
        let mut overview = SchemaOverview::default();
        for field in &self.fields {
            match &field.domain {
                FeatureDomain::Numeric => overview.numeric.push(&field.name),
                FeatureDomain::Lesion(_) => overview.lesion = Some(&field.name),
                domain if domain.is_binary() => overview.binary.push(&field.name),
                FeatureDomain::Categorical(values) => {
                    overview.categorical.push((&field.name, values.as_slice()));
                }
            }
        }
        overview
    }
}

fn check_labels(name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(SchemaError::EmptyDomain {
            name: name.to_string(),
        });
    }
    let mut seen = BTreeSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(SchemaError::DuplicateLabel {
                name: name.to_string(),
                label: value.clone(),
            });
        }
    }
    Ok(())
}

/// Schema fields grouped by kind, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaOverview<'a> {
    pub numeric: Vec<&'a str>,
    /// Two-valued `no`/`yes` fields.
    pub binary: Vec<&'a str>,
    /// Remaining categorical fields with their labels.
    pub categorical: Vec<(&'a str, &'a [String])>,
    /// Name of the lesion field; its labels come from
    /// [`FeatureSchema::lesion_values`].
    pub lesion: Option<&'a str>,
}
