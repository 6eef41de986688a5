//! End-to-end prediction with a linear model loaded from disk.

use std::io::Write;

use colic_encode::{
    ClassifierError, Encoder, LinearClassifier, PredictError, Predictor, parse_json_records,
};
use colic_model::Outcome;
use colic_standards::{REFERENCE_WIDTH, reference_schema};

/// Three classes; `lived` gains weight from the `pain: alert` position and
/// `died` from the `pain: extreme_pain` position.
fn model_json() -> String {
    let schema = reference_schema();
    let pain = schema.offset_of("pain").unwrap();
    let mut died = vec![0.0; REFERENCE_WIDTH];
    let euthanized = vec![0.0; REFERENCE_WIDTH];
    let mut lived = vec![0.0; REFERENCE_WIDTH];
    died[pain + 2] = 4.0;
    lived[pain] = 4.0;
    serde_json::json!({
        "intercepts": [0.0, 0.5, 0.0],
        "coefficients": [died, euthanized, lived],
    })
    .to_string()
}

fn write_model(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn predicts_outcomes_from_model_file() {
    let file = write_model(&model_json());
    let model = LinearClassifier::from_path(file.path()).unwrap();
    assert_eq!(model.n_classes(), 3);
    assert_eq!(model.n_features(), REFERENCE_WIDTH);

    let records = parse_json_records(
        r#"[{"pain": "extreme_pain"}, {"pain": "alert"}, {"pain": "depressed"}]"#,
    )
    .unwrap();
    let predictor = Predictor::new(Encoder::reference(), model);
    let predictions = predictor.predict(&records).unwrap();

    let outcomes: Vec<Outcome> = predictions.iter().map(|p| p.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Died, Outcome::Lived, Outcome::Euthanized]);
    for prediction in &predictions {
        let total: f64 = prediction.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(
            prediction.probability,
            prediction.probabilities[prediction.class_index]
        );
    }
    assert_eq!(predictor.predict_indices(&records).unwrap(), vec![0, 2, 1]);
}

#[test]
fn missing_model_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let error = LinearClassifier::from_path(&path).unwrap_err();
    assert!(matches!(error, ClassifierError::Io { .. }));
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn narrow_model_is_rejected_at_prediction() {
    let file = write_model(r#"{"intercepts": [0, 0, 0], "coefficients": [[1], [1], [1]]}"#);
    let model = LinearClassifier::from_path(file.path()).unwrap();
    let predictor = Predictor::new(Encoder::reference(), model);
    let records = parse_json_records(r#"{"pulse": 80}"#).unwrap();
    assert!(matches!(
        predictor.predict(&records),
        Err(PredictError::Classifier(ClassifierError::Shape { what: "input row", .. }))
    ));
}
