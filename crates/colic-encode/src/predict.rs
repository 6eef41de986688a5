//! Prediction facade: encode records, classify, map classes to outcomes.

use serde::Serialize;
use tracing::{debug, info_span};

use colic_model::{EncodeIssue, Outcome, Record};

use crate::classifier::Classifier;
use crate::encoder::Encoder;
use crate::error::PredictError;

/// Result for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub class_index: usize,
    pub outcome: Outcome,
    /// Probability of the predicted class.
    pub probability: f64,
    /// Probability of every class, by class index.
    pub probabilities: Vec<f64>,
    /// Soft issues raised while encoding the record.
    pub issues: Vec<EncodeIssue>,
}

/// Owns a classifier and the encoder that feeds it.
#[derive(Debug, Clone)]
pub struct Predictor<'s, C> {
    encoder: Encoder<'s>,
    classifier: C,
}

impl<'s, C: Classifier> Predictor<'s, C> {
    pub fn new(encoder: Encoder<'s>, classifier: C) -> Self {
        Self {
            encoder,
            classifier,
        }
    }

    pub fn encoder(&self) -> &Encoder<'s> {
        &self.encoder
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Raw class indices, one per record.
    ///
    /// # Errors
    ///
    /// Propagates classifier failures and batch size mismatches.
    pub fn predict_indices(&self, records: &[Record]) -> Result<Vec<usize>, PredictError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let batch = self.encode_batch(records).0;
        let indices = self.classifier.predict(&batch)?;
        check_batch("class indices", records.len(), indices.len())?;
        Ok(indices)
    }

    /// Outcomes with probabilities, one per record, in input order.
    ///
    /// # Errors
    ///
    /// Fails when the classifier fails, returns the wrong number of rows,
    /// returns a class index outside the outcome mapping, or returns a
    /// probability row too narrow for the predicted class.
    pub fn predict(&self, records: &[Record]) -> Result<Vec<Prediction>, PredictError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let span = info_span!("predict", records = records.len());
        let _guard = span.enter();

        let (batch, issues) = self.encode_batch(records);
        let indices = self.classifier.predict(&batch)?;
        check_batch("class indices", records.len(), indices.len())?;
        let probabilities = self.classifier.predict_proba(&batch)?;
        check_batch("probability rows", records.len(), probabilities.len())?;

        indices
            .into_iter()
            .zip(probabilities)
            .zip(issues)
            .map(|((class_index, probabilities), issues)| -> Result<Prediction, PredictError> {
                let outcome =
                    Outcome::from_index(class_index).ok_or(PredictError::UnknownClass(class_index))?;
                let probability = *probabilities.get(class_index).ok_or(
                    PredictError::ProbabilityWidth {
                        expected: class_index + 1,
                        actual: probabilities.len(),
                    },
                )?;
                debug!(%outcome, probability, issues = issues.len(), "record classified");
                Ok(Prediction {
                    class_index,
                    outcome,
                    probability,
                    probabilities,
                    issues,
                })
            })
            .collect()
    }

    /// Predict a single record.
    ///
    /// # Errors
    ///
    /// Same as [`Predictor::predict`].
    pub fn predict_one(&self, record: &Record) -> Result<Prediction, PredictError> {
        let mut predictions = self.predict(std::slice::from_ref(record))?;
        predictions.pop().ok_or(PredictError::BatchSize {
            what: "predictions",
            expected: 1,
            actual: 0,
        })
    }

    fn encode_batch(&self, records: &[Record]) -> (Vec<Vec<f64>>, Vec<Vec<EncodeIssue>>) {
        self.encoder
            .encode_many(records)
            .into_iter()
            .map(|encoded| (encoded.values, encoded.issues))
            .unzip()
    }
}

fn check_batch(what: &'static str, expected: usize, actual: usize) -> Result<(), PredictError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PredictError::BatchSize {
            what,
            expected,
            actual,
        })
    }
}
