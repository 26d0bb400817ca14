//! Collection capability.
//!
//! A list view is generic over the item it renders. Each item type names its
//! endpoint, its empty-state text and how one item becomes a row.

pub mod api;

use crate::shared::config::ClientConfig;
use serde::de::DeserializeOwned;

pub use api::{decode_collection, fetch_collection};

/// Secondary line of a row, optionally prefixed by an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetail {
    pub icon: Option<&'static str>,
    pub text: String,
}

impl RowDetail {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn with_icon(icon: &'static str, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon),
            text: text.into(),
        }
    }
}

/// Display data for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    pub name: String,
    pub details: Vec<RowDetail>,
}

pub trait CollectionItem: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path of the collection endpoint, e.g. "/models"
    const ENDPOINT: &'static str;
    /// Plural noun used in log messages
    const NOUN: &'static str;
    /// Header of the empty-state panel
    const EMPTY_TITLE: &'static str;
    /// Completes "Refer to the TensorCraft documentation to get instruction ..."
    const EMPTY_HINT: &'static str;

    fn row(&self, config: &ClientConfig) -> RowSummary;
}
