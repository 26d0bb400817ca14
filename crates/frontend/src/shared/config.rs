//! Client configuration.
//!
//! The client has no environment variables and no persisted state; the
//! configuration is a set of defaults provided once through context.

use leptos::prelude::*;

/// Port the collection service listens on.
pub const DEFAULT_API_PORT: u16 = 5678;

/// Month abbreviation, day, year: "Sep 13, 2020".
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

pub const DEFAULT_DOCS_URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_port: u16,
    /// Target of the documentation link in empty-state panels
    pub docs_url: String,
    /// chrono strftime pattern for creation dates
    pub date_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            docs_url: DEFAULT_DOCS_URL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn api_base(&self) -> String {
        crate::shared::api_utils::api_base(self.api_port)
    }
}

/// Read the configuration from context, falling back to defaults.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}
