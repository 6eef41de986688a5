//! Classifier boundary.
//!
//! A classifier is anything that maps a batch of encoded vectors to class
//! indices and per-class probabilities. Class indices follow
//! [`Outcome::from_index`](colic_model::Outcome::from_index).

use crate::error::ClassifierError;

/// A trained model over encoded vectors.
pub trait Classifier {
    /// Predicted class index for each row.
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError>;

    /// Class probabilities for each row, indexed by class.
    fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
        (**self).predict(batch)
    }

    fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError> {
        (**self).predict_proba(batch)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError> {
        (**self).predict(batch)
    }

    fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ClassifierError> {
        (**self).predict_proba(batch)
    }
}
