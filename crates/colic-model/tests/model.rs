//! Tests for colic-model types.

use colic_model::{EncodeIssue, IssueCounts, IssueKind, Outcome};

#[test]
fn outcome_index_mapping() {
    assert_eq!(Outcome::from_index(0), Some(Outcome::Died));
    assert_eq!(Outcome::from_index(1), Some(Outcome::Euthanized));
    assert_eq!(Outcome::from_index(2), Some(Outcome::Lived));
    assert_eq!(Outcome::from_index(3), None);
    for outcome in Outcome::ALL {
        assert_eq!(Outcome::from_index(outcome.index()), Some(outcome));
    }
}

#[test]
fn outcome_parses_and_displays() {
    assert_eq!("Lived".parse::<Outcome>(), Ok(Outcome::Lived));
    assert!("recovered".parse::<Outcome>().is_err());
    assert_eq!(Outcome::Euthanized.to_string(), "euthanized");
}

#[test]
fn outcome_serializes_lowercase() {
    let json = serde_json::to_string(&Outcome::Died).expect("serialize outcome");
    assert_eq!(json, "\"died\"");
}

#[test]
fn issue_counts_split_missing_from_rejected() {
    let issues = vec![
        EncodeIssue::missing("pulse"),
        EncodeIssue::missing("age"),
        EncodeIssue::rejected("rectal_temp", IssueKind::InvalidNumber, "warm"),
        EncodeIssue::rejected("pain", IssueKind::UnknownCategory, "agony"),
        EncodeIssue::rejected("lesion_1", IssueKind::UnknownLesionCode, "0"),
    ];
    let counts = IssueCounts::from_issues(&issues);
    assert_eq!(counts.missing, 2);
    assert_eq!(counts.rejected(), 3);
    assert_eq!(counts.total(), 5);
}

#[test]
fn issue_serializes_kind_in_snake_case() {
    let issue = EncodeIssue::rejected("pain", IssueKind::UnknownCategory, "agony");
    let json = serde_json::to_value(&issue).expect("serialize issue");
    assert_eq!(json["kind"], "unknown_category");
    assert_eq!(json["value"], "agony");
    assert_eq!(issue.to_string(), "pain: value not recognized, segment left empty");
}
