//! # Client configuration: `evaaz.toml`
//!
//! Defines the TOML document that configures where the client talks to and how it
//! persists the session. The web build embeds the file at compile time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://evaaz-poll-hqzi.vercel.app/api"
//! contact_url = "https://api.example.com/contact"
//! timeout_secs = 30           # applied to native builds only
//!
//! [session]
//! storage_key = "token"       # the one key every reader and writer uses
//! ```
//!
//! All structs derive `Default` (with production defaults) so that a missing or
//! empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `evaaz.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every API path is appended to, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Absolute URL the contact form posts to.
    #[serde(default = "default_contact_url")]
    pub contact_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_base_url() -> String {
    "https://evaaz-poll-hqzi.vercel.app/api".to_string()
}

fn default_contact_url() -> String {
    "https://api.example.com/contact".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_storage_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            contact_url: default_contact_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ApiConfig {
    /// Join an API path such as `"/school/search"` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl ClientConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "evaaz.toml"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session.storage_key, "token");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.contact_url, "https://api.example.com/contact");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://example.test/api");
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let api = ApiConfig {
            base_url: "http://example.test/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.endpoint("/auth/login"), "http://example.test/api/auth/login");
        assert_eq!(api.endpoint("school/allschools"), "http://example.test/api/school/allschools");
    }
}
