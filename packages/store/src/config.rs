//! # Client configuration: `foodshare.toml`
//!
//! Defines the TOML configuration consumed by the FoodShare client. Every section
//! falls back to production defaults, so a missing or empty file is equivalent to
//! [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! origin = "http://localhost:5000"   # scheme + host + port of the backend
//!
//! [storage]
//! session_key = "foodshare.session"  # durable key holding the session record
//! ```
//!
//! The REST base path (`/api`) is fixed; only the origin is configurable.
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Backend origin. [`ApiConfig::base_url`] appends the fixed base path. |
//! | [`StorageConfig`] | Name of the single durable key used by the session store. |

use serde::{Deserialize, Serialize};

/// Fixed REST base path appended to the configured origin.
pub const API_BASE_PATH: &str = "/api";

/// Top-level configuration stored in `foodshare.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, e.g. `http://localhost:5000`.
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl ApiConfig {
    /// Origin joined with [`API_BASE_PATH`], without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), API_BASE_PATH)
    }
}

/// Durable storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_session_key() -> String {
    "foodshare.session".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.api.origin = origin.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "foodshare.toml"
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
