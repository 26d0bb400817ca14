use crate::domain::common::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Trained model published in the service storage.
///
/// Fields fall back to their defaults when the service omits them or sends
/// `null`; the client renders whatever it receives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: String,

    /// Unix timestamp, seconds. The service writes a float
    /// (`datetime.timestamp()`), so fractions are kept.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: f64,
}

impl Model {
    pub fn new(name: impl Into<String>, tag: impl Into<String>, created_at: f64) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            created_at,
        }
    }

    /// Creation instant rounded to whole milliseconds, `None` when not
    /// representable.
    pub fn created_at_millis(&self) -> Option<i64> {
        let millis = (self.created_at * 1000.0).round();
        if millis.is_finite() && millis >= i64::MIN as f64 && millis < i64::MAX as f64 {
            Some(millis as i64)
        } else {
            None
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at_millis()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
