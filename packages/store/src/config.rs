//! # Viewer configuration: `viewer.toml`
//!
//! Optional TOML file read by the server and the client wrappers. A missing
//! or empty file is the same as the defaults.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # where /api/project/* is served
//!
//! [database]
//! max_connections = 5
//! ```
//!
//! Environment variables take precedence over the file; see
//! [`ViewerConfig::with_env_overrides`].

use serde::{Deserialize, Serialize};

/// Overrides `api.base_url`.
pub const ENV_API_BASE_URL: &str = "VIEWER_API_BASE_URL";
/// Overrides `database.max_connections`.
pub const ENV_MAX_CONNECTIONS: &str = "VIEWER_DB_MAX_CONNECTIONS";
/// Path of the config file to read instead of [`ViewerConfig::filename`].
pub const ENV_CONFIG_PATH: &str = "VIEWER_CONFIG";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
        }
    }
}

impl ViewerConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "viewer.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    /// Unparseable numbers are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(max) = lookup(ENV_MAX_CONNECTIONS).and_then(|v| v.trim().parse().ok()) {
            self.database.max_connections = max;
        }
        self
    }
}
