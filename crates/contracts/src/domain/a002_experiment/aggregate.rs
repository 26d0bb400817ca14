use crate::domain::common::null_as_default;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single metric reported for a training epoch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
}

/// One iteration of model fitting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Epoch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Machine-learning experiment: a named sequence of epochs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Experiment {
    /// Hex-encoded UUID assigned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub epochs: Vec<Epoch>,
}

impl Experiment {
    pub fn new(name: impl Into<String>, epochs: Vec<Epoch>) -> Self {
        Self {
            id: None,
            name: name.into(),
            epochs,
        }
    }

    pub fn epoch_count(&self) -> usize {
        self.epochs.len()
    }

    pub fn uuid(&self) -> Option<Uuid> {
        self.id.as_deref().and_then(|s| Uuid::parse_str(s).ok())
    }
}
