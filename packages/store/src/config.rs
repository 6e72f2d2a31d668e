//! # Application configuration: `hopper.toml`
//!
//! Defines where the client finds its two external collaborators: the trip
//! backend and the auth provider.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [auth]
//! url = "https://project.supabase.co"
//! anon_key = "public-anon-key"
//! ```
//!
//! ## Sources
//!
//! The web build has no process environment at runtime, so values are baked in
//! at compile time: [`AppConfig::from_build_env`] starts from the defaults and
//! overlays `HOPPER_API_URL`, `HOPPER_AUTH_URL` and `HOPPER_AUTH_KEY` when they
//! were set during the build. [`AppConfig::from_toml`] parses an explicit file.
//!
//! All structs derive `Default` so a missing or partial file is equivalent to
//! the defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Trip backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

/// Auth provider configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Project URL of the auth provider.
    #[serde(default = "default_auth_url")]
    pub url: String,
    /// Public (anonymous) API key sent with every auth request.
    #[serde(default)]
    pub anon_key: String,
}

fn default_auth_url() -> String {
    "http://localhost:54321".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: default_auth_url(),
            anon_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Builder method to set the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = trim_url(url.into());
        self
    }

    /// Builder method to set the auth provider URL and key.
    pub fn with_auth(mut self, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        self.auth.url = trim_url(url.into());
        self.auth.anon_key = anon_key.into();
        self
    }

    /// Defaults overlaid with values captured at build time.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("HOPPER_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(url) = option_env!("HOPPER_AUTH_URL") {
            config.auth.url = trim_url(url.to_string());
        }
        if let Some(key) = option_env!("HOPPER_AUTH_KEY") {
            config.auth.anon_key = key.to_string();
        }
        tracing::debug!(api = %config.api.base_url, auth = %config.auth.url, "loaded config");
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = trim_url(config.api.base_url);
        config.auth.url = trim_url(config.auth.url);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.auth.anon_key.is_empty());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml("[auth]\nanon_key = \"k\"\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.auth.anon_key, "k");
        assert_eq!(config.auth.url, "http://localhost:54321");

        // Empty file is the default config
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"https://trips.example.com/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://trips.example.com");

        let config = AppConfig::default().with_auth("https://auth.example.com//", "key");
        assert_eq!(config.auth.url, "https://auth.example.com");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default()
            .with_api_url("https://api.example.com")
            .with_auth("https://auth.example.com", "anon");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
