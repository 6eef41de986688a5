//! Record input parsing.
//!
//! Two input shapes are accepted:
//!
//! - the chat-style text form `key: value, key: value, ...`
//! - JSON, either one record object or an array of record objects
//!
//! Both reject malformed input with a [`ParseError`]; values are not
//! interpreted here, the encoder decides whether they are usable.

use std::collections::BTreeSet;

use colic_model::Record;
use serde::Deserialize;

use crate::error::ParseError;

/// Parse `key: value` pairs separated by commas.
///
/// Line breaks are treated as plain whitespace, keys and values are trimmed,
/// and empty segments (for example a trailing comma) are skipped. The value
/// is everything after the first `:`.
///
/// # Errors
///
/// Fails on a pair without `:`, an empty key, or a repeated key.
pub fn parse_record(text: &str) -> Result<Record, ParseError> {
    let mut record = Record::new();
    let mut seen = BTreeSet::new();

    for (index, segment) in text.split(',').enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let position = index + 1;
        let Some((key, value)) = segment.split_once(':') else {
            return Err(ParseError::MissingSeparator {
                position,
                pair: segment.to_string(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::EmptyKey { position });
        }
        if !seen.insert(key.to_string()) {
            return Err(ParseError::DuplicateKey {
                key: key.to_string(),
            });
        }
        record.insert(key, value.trim());
    }

    Ok(record)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRecords {
    Many(Vec<Record>),
    One(Record),
}

/// Parse JSON records: a single object or an array of objects.
///
/// # Errors
///
/// Fails when the text is not valid JSON of either shape.
pub fn parse_json_records(text: &str) -> Result<Vec<Record>, ParseError> {
    let parsed: JsonRecords = serde_json::from_str(text)?;
    Ok(match parsed {
        JsonRecords::Many(records) => records,
        JsonRecords::One(record) => vec![record],
    })
}

#[cfg(test)]
mod tests {
    use colic_model::RawValue;

    use super::*;

    #[test]
    fn parses_multiline_pairs() {
        let record = parse_record(
            "surgery: yes,\n age: adult,\n rectal_temp: 38.1,\n pulse: 132.0,\n pain: severe_pain\n",
        )
        .unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(record.get("pain"), Some(&RawValue::from("severe_pain")));
        assert_eq!(record.get("rectal_temp"), Some(&RawValue::from("38.1")));
    }

    #[test]
    fn value_keeps_text_after_first_colon() {
        let record = parse_record("note: a:b").unwrap();
        assert_eq!(record.get("note"), Some(&RawValue::from("a:b")));
    }

    #[test]
    fn trailing_comma_is_ignored() {
        let record = parse_record("age: young,").unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn rejects_duplicate_key() {
        let err = parse_record("pulse: 80, pulse: 90").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateKey { key } if key == "pulse"));
    }

    #[test]
    fn rejects_pair_without_separator() {
        let err = parse_record("pulse: 80, surgery yes").unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { position: 2, .. }));
    }

    #[test]
    fn rejects_empty_key() {
        let err = parse_record(": 80").unwrap_err();
        assert!(matches!(err, ParseError::EmptyKey { position: 1 }));
    }

    #[test]
    fn json_accepts_object_or_array() {
        let one = parse_json_records(r#"{"pulse": 80}"#).unwrap();
        assert_eq!(one.len(), 1);
        let many = parse_json_records(r#"[{"pulse": 80}, {"lesion_1": 2209}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].get("lesion_1"), Some(&RawValue::Integer(2209)));
        assert!(matches!(
            parse_json_records("[1, 2]"),
            Err(ParseError::Json(_))
        ));
    }
}
