//! # Client configuration — `party-planner.toml`
//!
//! Tells the client where the events API lives. The API is namespaced per
//! cohort, so every resource URL is `{base_url}/{cohort}/{resource}`.
//!
//! ```toml
//! [api]
//! base_url = "https://fsa-crud-2aa9294fe819.herokuapp.com/api"
//! cohort = "2506-CT-WEB-PT"
//! ```
//!
//! Missing keys fall back to the defaults above, so an empty file is
//! equivalent to [`PlannerConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `party-planner.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Location of the events REST API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cohort")]
    pub cohort: String,
}

fn default_base_url() -> String {
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api".to_string()
}

fn default_cohort() -> String {
    "2506-CT-WEB-PT".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cohort: default_cohort(),
        }
    }
}

impl ApiConfig {
    /// Root URL all resource paths are appended to, without a trailing slash.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let cohort = self.cohort.trim_matches('/');
        if cohort.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{cohort}")
        }
    }
}

impl PlannerConfig {
    /// Builder method to point the client at another server.
    pub fn with_api(mut self, base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        self.api = ApiConfig {
            base_url: base_url.into(),
            cohort: cohort.into(),
        };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "party-planner.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
