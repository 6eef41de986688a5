//! Prediction target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome classes in the order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Died,
    Euthanized,
    Lived,
}

impl Outcome {
    /// Every outcome, indexed by class index.
    pub const ALL: [Outcome; 3] = [Outcome::Died, Outcome::Euthanized, Outcome::Lived];

    /// Map a classifier class index to its outcome.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Outcome::Died => 0,
            Outcome::Euthanized => 1,
            Outcome::Lived => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Died => "died",
            Outcome::Euthanized => "euthanized",
            Outcome::Lived => "lived",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "died" => Ok(Outcome::Died),
            "euthanized" => Ok(Outcome::Euthanized),
            "lived" => Ok(Outcome::Lived),
            _ => Err(format!("Unknown outcome: {s}")),
        }
    }
}
