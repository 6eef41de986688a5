//! User-facing failure messages.
//!
//! Users see one of two fixed messages; the full error chain goes to the log.

use std::fmt;
use std::io;

use colic_encode::{ClassifierError, ParseError, PredictError};

/// Message shown for bad input, flags, or model files.
pub const PARAMETERS_MESSAGE: &str = "parsing error or invalid parameters";

/// Message shown for everything else.
pub const INTERNAL_MESSAGE: &str = "internal error, contact the operators";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The caller supplied something unusable.
    Parameters,
    Internal,
}

impl Failure {
    /// Classify an error by the first cause in its chain that decides it.
    ///
    /// Unreadable input, malformed records and unusable model files are the
    /// caller's fault. A classifier that misbehaves at prediction time is not.
    pub fn classify(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if cause.is::<ParseError>() || cause.is::<io::Error>() {
                return Failure::Parameters;
            }
            if let Some(error) = cause.downcast_ref::<ClassifierError>() {
                return classify_classifier(error);
            }
            if let Some(error) = cause.downcast_ref::<PredictError>() {
                return match error {
                    PredictError::Classifier(inner) => classify_classifier(inner),
                    _ => Failure::Internal,
                };
            }
        }
        Failure::Internal
    }

    pub fn message(self) -> &'static str {
        match self {
            Failure::Parameters => PARAMETERS_MESSAGE,
            Failure::Internal => INTERNAL_MESSAGE,
        }
    }
}

fn classify_classifier(error: &ClassifierError) -> Failure {
    match error {
        ClassifierError::Io { .. } | ClassifierError::Format(_) | ClassifierError::Shape { .. } => {
            Failure::Parameters
        }
        _ => Failure::Internal,
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};

    use colic_encode::{Classifier, Encoder, LinearClassifier, Predictor, parse_record};
    use colic_model::Record;

    use super::*;

    /// Answers every row with the same class and a uniform probability row.
    struct OutOfRange;

    impl Classifier for OutOfRange {
        fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
            Ok(vec![7; batch.len()])
        }

        fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError> {
            Ok(vec![vec![1.0 / 3.0; 3]; batch.len()])
        }
    }

    /// Fails every call the way a broken runtime would.
    struct Broken;

    impl Classifier for Broken {
        fn predict(&self, _batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
            Err(ClassifierError::Backend("session closed".to_owned()))
        }

        fn predict_proba(&self, _batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError> {
            Err(ClassifierError::Backend("session closed".to_owned()))
        }
    }

    #[test]
    fn parse_errors_are_parameter_failures() {
        let error = parse_record("pulse 80")
            .context("read record")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Parameters);
    }

    #[test]
    fn missing_files_are_parameter_failures() {
        let error = std::fs::read_to_string("/nonexistent/colic/record.txt")
            .context("read input")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Parameters);
    }

    #[test]
    fn other_errors_are_internal() {
        let error = anyhow!("unexpected state");
        assert_eq!(Failure::classify(&error), Failure::Internal);
        assert_eq!(Failure::Internal.to_string(), INTERNAL_MESSAGE);
    }

    #[test]
    fn out_of_range_class_is_internal() {
        let error = Predictor::new(Encoder::reference(), OutOfRange)
            .predict(&[Record::new()])
            .context("predict outcomes")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Internal);
    }

    #[test]
    fn backend_failures_are_internal() {
        let error = Predictor::new(Encoder::reference(), Broken)
            .predict(&[Record::new()])
            .context("predict outcomes")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Internal);

        let error = anyhow::Error::new(ClassifierError::Backend("oom".to_owned()));
        assert_eq!(Failure::classify(&error), Failure::Internal);
    }

    #[test]
    fn malformed_models_are_parameter_failures() {
        let error = LinearClassifier::from_json(r#"{"intercepts": [0.0], "coefficients": []}"#)
            .context("load model")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Parameters);

        let error = LinearClassifier::from_json("not json")
            .context("load model")
            .unwrap_err();
        assert_eq!(Failure::classify(&error), Failure::Parameters);
    }
}
