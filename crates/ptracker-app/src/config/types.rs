//! Configuration types for the promise tracker
//!
//! Defines `Settings` and its `[api]`, `[ui]` and `[behavior]` sections.

use serde::{Deserialize, Serialize};

use ptracker_api::{ApiConfig, DEFAULT_LIST_LIMIT};
use ptracker_core::{CandidateId, DISPLAY_DATE_FORMAT};

use crate::scorecard::DEFAULT_TOP_PROMISES;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Scheme, host and port of the tracker backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size used when fetching a candidate's promises
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_secs: default_timeout_secs(),
            fetch_limit: default_fetch_limit(),
        }
    }
}

impl ApiSettings {
    pub fn client_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            api_prefix: self.api_prefix.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Rows per page in the promise table
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Promises highlighted on the scorecard
    #[serde(default = "default_top_promises")]
    pub top_promises: usize,

    /// chrono format string for dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            top_promises: default_top_promises(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start with journalist (edit) mode on
    #[serde(default)]
    pub journalist: bool,

    /// Candidate shown on `/` instead of the first one on record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_candidate: Option<CandidateId>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fetch_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

fn default_page_size() -> usize {
    10
}

fn default_top_promises() -> usize {
    DEFAULT_TOP_PROMISES
}

fn default_date_format() -> String {
    DISPLAY_DATE_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8000");
        assert_eq!(settings.api.api_prefix, "/api/v1");
        assert_eq!(settings.api.fetch_limit, 100);
        assert_eq!(settings.ui.page_size, 10);
        assert_eq!(settings.ui.top_promises, 4);
        assert!(!settings.behavior.journalist);
        assert_eq!(settings.behavior.default_candidate, None);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
base_url = "https://tracker.example"

[ui]
page_size = 25
"#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://tracker.example");
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.ui.page_size, 25);
        assert_eq!(settings.ui.date_format, "%B %-d, %Y");
    }

    #[test]
    fn test_client_config() {
        let api = ApiSettings {
            timeout_secs: 3,
            ..Default::default()
        };
        let config = api.client_config();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.api_prefix, "/api/v1");
    }
}
