//! Soft diagnostics produced while encoding a record.
//!
//! None of these stop encoding: each one names the fallback that was written
//! into the vector instead of the caller's value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Field absent; the missing-value segment was substituted.
    MissingValue,
    /// Numeric field did not parse; a zero was written.
    InvalidNumber,
    /// Categorical value is not a declared label; the segment is all zeros.
    UnknownCategory,
    /// Lesion code decoded to no known label; the segment is all zeros.
    UnknownLesionCode,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingValue => "missing_value",
            IssueKind::InvalidNumber => "invalid_number",
            IssueKind::UnknownCategory => "unknown_category",
            IssueKind::UnknownLesionCode => "unknown_lesion_code",
        }
    }

    /// Short explanation used in logs and tables.
    pub fn describe(&self) -> &'static str {
        match self {
            IssueKind::MissingValue => "value missing, default substituted",
            IssueKind::InvalidNumber => "value is not numeric, zero substituted",
            IssueKind::UnknownCategory => "value not recognized, segment left empty",
            IssueKind::UnknownLesionCode => "lesion code not recognized, segment left empty",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A soft diagnostic for one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeIssue {
    pub field: String,
    pub kind: IssueKind,
    /// Offending raw value rendered as text; `None` for missing fields.
    pub value: Option<String>,
}

impl EncodeIssue {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: IssueKind::MissingValue,
            value: None,
        }
    }

    pub fn rejected(field: &str, kind: IssueKind, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for EncodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind.describe())
    }
}

/// Count of issues per kind, for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub missing: usize,
    pub invalid_number: usize,
    pub unknown_category: usize,
    pub unknown_lesion_code: usize,
}

impl IssueCounts {
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a EncodeIssue>) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.kind {
                IssueKind::MissingValue => counts.missing += 1,
                IssueKind::InvalidNumber => counts.invalid_number += 1,
                IssueKind::UnknownCategory => counts.unknown_category += 1,
                IssueKind::UnknownLesionCode => counts.unknown_lesion_code += 1,
            }
        }
        counts
    }

    /// Issues caused by a value that was present but unusable.
    pub fn rejected(&self) -> usize {
        self.invalid_number + self.unknown_category + self.unknown_lesion_code
    }

    pub fn total(&self) -> usize {
        self.missing + self.rejected()
    }
}
