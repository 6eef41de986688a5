//! Reference schema of the horse colic outcome model.
//!
//! Field order and label order below are the layout the classifier was
//! trained on (89 positions). Each field also carries its clinical baseline:
//! the segment written when a record omits the field. Baselines describe a
//! healthy adult horse; fields without a sensible baseline use `NaN`, which
//! the classifier treats as a missing value.

use std::sync::LazyLock;

use colic_model::{FeatureDomain, FeatureSchema, FieldSpec};

use crate::lesion::LESION_LABELS;

/// Width of every vector produced with the reference schema.
pub const REFERENCE_WIDTH: usize = 89;

/// Name of the lesion field in the reference schema.
pub const LESION_FIELD: &str = "lesion_1";

static REFERENCE_SCHEMA: LazyLock<FeatureSchema> = LazyLock::new(|| {
    FeatureSchema::new(reference_fields()).expect("Invalid reference schema")
});

/// The shared reference schema, built on first use.
pub fn reference_schema() -> &'static FeatureSchema {
    &REFERENCE_SCHEMA
}

/// Reference field list in vector order.
pub fn reference_fields() -> Vec<FieldSpec> {
    vec![
        // Vital signs and laboratory values
        numeric("rectal_temp", 37.8),
        numeric("pulse", 73.0),
        numeric("respiratory_rate", 9.0),
        numeric("nasogastric_reflux_ph", 4.0),
        numeric("packed_cell_volume", f64::NAN),
        numeric("total_protein", 7.0),
        numeric("abdomo_protein", 2.0),
        // Examination findings
        one_hot(
            "abdomen",
            &["distend_large", "distend_small", "firm", "normal", "other"],
            "normal",
        ),
        one_hot(
            "abdominal_distention",
            &["moderate", "none", "severe", "slight"],
            "none",
        ),
        no_baseline("abdomo_appearance", &["clear", "cloudy", "serosanguious"]),
        one_hot("age", &["adult", "young"], "adult"),
        no_baseline("capillary_refill_time", &["3", "less_3_sec", "more_3_sec"]),
        one_hot("cp_data", &["no", "yes"], "no"),
        one_hot(
            "mucous_membrane",
            &[
                "bright_pink",
                "bright_red",
                "dark_cyanotic",
                "normal_pink",
                "pale_cyanotic",
                "pale_pink",
            ],
            "normal_pink",
        ),
        one_hot(
            "nasogastric_reflux",
            &["less_1_liter", "more_1_liter", "none"],
            "less_1_liter",
        ),
        one_hot("nasogastric_tube", &["none", "significant", "slight"], "slight"),
        one_hot(
            "pain",
            &["alert", "depressed", "extreme_pain", "mild_pain", "severe_pain"],
            "alert",
        ),
        one_hot(
            "peripheral_pulse",
            &["absent", "increased", "normal", "reduced"],
            "normal",
        ),
        one_hot(
            "peristalsis",
            &["absent", "hypermotile", "hypomotile", "normal"],
            "normal",
        ),
        no_baseline(
            "rectal_exam_feces",
            &["absent", "decreased", "increased", "normal"],
        ),
        one_hot("surgery", &["no", "yes"], "no"),
        one_hot("surgical_lesion", &["no", "yes"], "no"),
        no_baseline("temp_of_extremities", &["cold", "cool", "normal", "warm"]),
        // Packed lesion code; no lesion when absent
        FieldSpec::new(
            LESION_FIELD,
            FeatureDomain::lesion(LESION_LABELS),
            vec![0.0; LESION_LABELS.len()],
        ),
    ]
}

fn numeric(name: &str, baseline: f64) -> FieldSpec {
    FieldSpec::new(name, FeatureDomain::Numeric, vec![baseline])
}

fn one_hot(name: &str, values: &[&str], baseline: &str) -> FieldSpec {
    let default = values
        .iter()
        .map(|value| if *value == baseline { 1.0 } else { 0.0 })
        .collect();
    FieldSpec::new(name, FeatureDomain::categorical(values.iter().copied()), default)
}

fn no_baseline(name: &str, values: &[&str]) -> FieldSpec {
    FieldSpec::new(
        name,
        FeatureDomain::categorical(values.iter().copied()),
        vec![f64::NAN; values.len()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_width_is_stable() {
        let schema = reference_schema();
        assert_eq!(schema.len(), 24);
        assert_eq!(schema.total_width(), REFERENCE_WIDTH);
        assert_eq!(schema.default_row().len(), REFERENCE_WIDTH);
    }

    #[test]
    fn one_hot_baselines_mark_exactly_one_label() {
        for field in reference_schema().fields() {
            let FeatureDomain::Categorical(values) = &field.domain else {
                continue;
            };
            if field.default.iter().any(|value| value.is_nan()) {
                assert!(field.default.iter().all(|value| value.is_nan()), "{}", field.name);
                continue;
            }
            let marked: f64 = field.default.iter().sum();
            assert!((marked - 1.0).abs() < f64::EPSILON, "{} marks {marked}", field.name);
            assert_eq!(field.default.len(), values.len());
        }
    }

    #[test]
    fn lesion_field_is_last() {
        let schema = reference_schema();
        assert_eq!(schema.offset_of(LESION_FIELD), Some(REFERENCE_WIDTH - 26));
        assert_eq!(schema.lesion_values().map(<[String]>::len), Some(26));
    }
}
