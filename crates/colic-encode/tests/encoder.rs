//! Integration tests for the reference encoder.

use colic_encode::{Encoder, EncoderOptions, LesionCodeDecoder, MissingValuePolicy, parse_record};
use colic_model::{FeatureDomain, FeatureSchema, FieldSpec, IssueKind, Record};
use colic_standards::{LESION_FIELD, LesionTables, REFERENCE_WIDTH, reference_schema};

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|value| value.to_bits()).collect()
}

fn segment<'a>(values: &'a [f64], field: &str) -> &'a [f64] {
    let schema = reference_schema();
    let start = schema.offset_of(field).unwrap();
    let width = schema.field(field).unwrap().width();
    &values[start..start + width]
}

fn full_record() -> Record {
    Record::new()
        .with("surgery", "yes")
        .with("age", "adult")
        .with("rectal_temp", 38.1)
        .with("pulse", 132.0)
        .with("respiratory_rate", 24.0)
        .with("temp_of_extremities", "cool")
        .with("peripheral_pulse", "reduced")
        .with("mucous_membrane", "dark_cyanotic")
        .with("capillary_refill_time", "more_3_sec")
        .with("pain", "depressed")
        .with("peristalsis", "absent")
        .with("abdominal_distention", "slight")
        .with("nasogastric_tube", "slight")
        .with("nasogastric_reflux", "less_1_liter")
        .with("nasogastric_reflux_ph", 6.5)
        .with("rectal_exam_feces", "decreased")
        .with("abdomen", "distend_small")
        .with("packed_cell_volume", 57.0)
        .with("total_protein", 8.5)
        .with("abdomo_appearance", "serosanguious")
        .with("abdomo_protein", 3.4)
        .with("surgical_lesion", "yes")
        .with("lesion_1", 2209_i64)
        .with("cp_data", "no")
}

#[test]
fn full_record_encodes_cleanly() {
    let encoded = Encoder::reference().encode(&full_record());
    assert_eq!(encoded.values.len(), REFERENCE_WIDTH);
    assert!(encoded.is_clean(), "{:?}", encoded.issues);

    assert_eq!(&encoded.values[..7], &[38.1, 132.0, 24.0, 6.5, 57.0, 8.5, 3.4]);
    assert_eq!(
        segment(&encoded.values, "mucous_membrane"),
        &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0]
    );
    assert_eq!(segment(&encoded.values, "surgery"), &[0.0, 1.0]);

    let lesion = segment(&encoded.values, LESION_FIELD);
    let marked: Vec<&str> = reference_schema()
        .lesion_values()
        .unwrap()
        .iter()
        .zip(lesion)
        .filter(|(_, value)| **value == 1.0)
        .map(|(label, _)| label.as_str())
        .collect();
    assert_eq!(
        marked,
        vec!["sm_intestine", "strangulation", "lipoma/splenic_incarceration"]
    );
}

#[test]
fn empty_record_is_the_clinical_default_row() {
    let schema = reference_schema();
    let encoded = Encoder::reference().encode(&Record::new());
    assert_eq!(bits(&encoded.values), bits(&schema.default_row()));
    assert_eq!(encoded.issues.len(), schema.len());
    assert!(
        encoded
            .issues
            .iter()
            .all(|issue| issue.kind == IssueKind::MissingValue && issue.value.is_none())
    );
}

#[test]
fn zero_policy_gives_all_zero_row() {
    let encoder = Encoder::reference()
        .with_options(EncoderOptions::default().with_missing(MissingValuePolicy::Zeros));
    let encoded = encoder.encode(&Record::new());
    assert_eq!(encoded.values, vec![0.0; REFERENCE_WIDTH]);
}

#[test]
fn encoding_is_deterministic() {
    let encoder = Encoder::reference();
    let record = parse_record("pulse: 88, pain: severe_pain, lesion_1: 31110").unwrap();
    let first = encoder.encode(&record);
    let second = encoder.encode(&record);
    assert_eq!(bits(&first.values), bits(&second.values));
    assert_eq!(first.issues, second.issues);
}

#[test]
fn unknown_category_leaves_segment_empty() {
    let encoded = Encoder::reference().encode(&Record::new().with("pain", "agony"));
    assert_eq!(segment(&encoded.values, "pain"), &[0.0; 5]);
    let issue = encoded.issues.iter().find(|issue| issue.field == "pain").unwrap();
    assert_eq!(issue.kind, IssueKind::UnknownCategory);
    assert_eq!(issue.value.as_deref(), Some("agony"));
}

#[test]
fn non_numeric_value_becomes_zero() {
    let encoded = Encoder::reference().encode(&Record::new().with("pulse", "fast"));
    assert_eq!(segment(&encoded.values, "pulse"), &[0.0]);
    let issue = encoded.issues.iter().find(|issue| issue.field == "pulse").unwrap();
    assert_eq!(issue.kind, IssueKind::InvalidNumber);
}

#[test]
fn numeric_capillary_refill_matches_label() {
    let encoded = Encoder::reference().encode(&Record::new().with("capillary_refill_time", 3_i64));
    assert_eq!(segment(&encoded.values, "capillary_refill_time"), &[1.0, 0.0, 0.0]);
}

#[test]
fn no_lesion_code_reports_issue() {
    let encoded = Encoder::reference().encode(&Record::new().with(LESION_FIELD, "0"));
    assert_eq!(segment(&encoded.values, LESION_FIELD), &[0.0; 26]);
    assert!(
        encoded
            .issues
            .iter()
            .any(|issue| issue.field == LESION_FIELD && issue.kind == IssueKind::UnknownLesionCode)
    );
}

#[test]
fn unknown_keys_do_not_change_the_vector() {
    let encoder = Encoder::reference();
    let plain = encoder.encode(&full_record());
    let noisy = encoder.encode(&full_record().with("owner", "someone").with("weight", 450_i64));
    assert_eq!(bits(&plain.values), bits(&noisy.values));
    assert_eq!(plain.issues, noisy.issues);
}

#[test]
fn encode_many_preserves_order() {
    let encoder = Encoder::reference();
    assert!(encoder.encode_many(&[]).is_empty());

    let records = vec![full_record(), Record::new().with("pulse", "40")];
    let many = encoder.encode_many(&records);
    assert_eq!(many.len(), 2);
    for (record, encoded) in records.iter().zip(&many) {
        assert_eq!(bits(&encoded.values), bits(&encoder.encode(record).values));
    }
}

#[test]
fn coinciding_lesion_labels_mark_one_position() {
    static SITES: &[(&str, &str)] = &[("2", "shared")];
    static TYPES: &[(&str, &str)] = &[("1", "shared")];
    let tables = LesionTables {
        site: SITES,
        kind: TYPES,
        ..LesionTables::REFERENCE
    };
    let schema = FeatureSchema::new(vec![FieldSpec::new(
        "lesion",
        FeatureDomain::lesion(["shared", "obturation"]),
        vec![0.0, 0.0],
    )])
    .unwrap();
    let encoder = Encoder::new(&schema).with_decoder(LesionCodeDecoder::new(tables));
    let encoded = encoder.encode(&Record::new().with("lesion", "2101"));
    assert_eq!(encoded.values, vec![1.0, 1.0]);

    let encoded = encoder.encode(&Record::new().with("lesion", "2100"));
    assert_eq!(encoded.values, vec![1.0, 0.0]);
    assert!(encoded.is_clean());
}
