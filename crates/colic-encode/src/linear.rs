//! Multinomial linear classifier loaded from JSON.
//!
//! Model file layout:
//!
//! ```json
//! {
//!   "intercepts":   [b0, b1, b2],
//!   "coefficients": [[w0_0, ..., w0_88], [w1_0, ...], [w2_0, ...]]
//! }
//! ```
//!
//! Row `k` scores class `k`; probabilities are the softmax of the scores.
//! `NaN` inputs (features without a value) contribute nothing to a score.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Classifier;
use crate::error::ClassifierError;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearModelFile {
    intercepts: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
}

/// Softmax-over-linear-scores classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearModelFile", into = "LinearModelFile")]
pub struct LinearClassifier {
    intercepts: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
    n_features: usize,
}

impl TryFrom<LinearModelFile> for LinearClassifier {
    type Error = ClassifierError;

    fn try_from(file: LinearModelFile) -> Result<Self, Self::Error> {
        Self::new(file.intercepts, file.coefficients)
    }
}

impl From<LinearClassifier> for LinearModelFile {
    fn from(model: LinearClassifier) -> Self {
        Self {
            intercepts: model.intercepts,
            coefficients: model.coefficients,
        }
    }
}

impl LinearClassifier {
    /// Build a classifier, checking that all rows agree in shape.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Shape`] when there are no classes, the
    /// coefficient row count differs from the intercept count, or rows differ
    /// in width.
    pub fn new(intercepts: Vec<f64>, coefficients: Vec<Vec<f64>>) -> Result<Self, ClassifierError> {
        if intercepts.is_empty() {
            return Err(ClassifierError::Shape {
                what: "classes",
                expected: 1,
                actual: 0,
            });
        }
        if coefficients.len() != intercepts.len() {
            return Err(ClassifierError::Shape {
                what: "coefficient rows",
                expected: intercepts.len(),
                actual: coefficients.len(),
            });
        }
        let n_features = coefficients[0].len();
        if let Some(row) = coefficients.iter().find(|row| row.len() != n_features) {
            return Err(ClassifierError::Shape {
                what: "coefficient row width",
                expected: n_features,
                actual: row.len(),
            });
        }
        Ok(Self {
            intercepts,
            coefficients,
            n_features,
        })
    }

    /// Load a model from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or inconsistent shapes.
    pub fn from_json(text: &str) -> Result<Self, ClassifierError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a model from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not hold a valid model.
    pub fn from_path(path: &Path) -> Result<Self, ClassifierError> {
        let text = fs::read_to_string(path).map_err(|source| ClassifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            classes = model.n_classes(),
            features = model.n_features,
            "loaded linear model"
        );
        Ok(model)
    }

    pub fn n_classes(&self) -> usize {
        self.intercepts.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    fn scores(&self, row: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if row.len() != self.n_features {
            return Err(ClassifierError::Shape {
                what: "input row",
                expected: self.n_features,
                actual: row.len(),
            });
        }
        Ok(self
            .intercepts
            .iter()
            .zip(&self.coefficients)
            .map(|(intercept, weights)| {
                intercept
                    + weights
                        .iter()
                        .zip(row)
                        .filter(|(_, x)| !x.is_nan())
                        .map(|(w, x)| w * x)
                        .sum::<f64>()
            })
            .collect())
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
        batch
            .iter()
            .map(|row| self.scores(row).map(|scores| argmax(&scores)))
            .collect()
    }

    fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError> {
        batch
            .iter()
            .map(|row| self.scores(row).map(|scores| softmax(&scores)))
            .collect()
    }
}

/// Index of the largest score; the first one wins ties.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = index;
        }
    }
    best
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|score| (score - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|value| value / total).collect()
}
