//! Client configuration: endpoints, timeout, and the local API key slot.

use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// Production endpoint for single published reports. Slugs are appended directly.
pub const DEFAULT_REPORT_BASE_URL: &str = "https://marsapi.ams.usda.gov/services/v1.2/reports/";

/// Production endpoint for fruit and vegetable market queries.
pub const DEFAULT_MARKET_BASE_URL: &str =
    "https://mymarketnews.ams.usda.gov/get_external_api/result";

/// Environment variable consulted for the API key when no other source has one.
pub const DEFAULT_API_KEY_ENV: &str = "MY_MARKET_NEWS_API_KEY";

/// Placeholder shipped in sample configuration files. Never treated as a real key.
pub const PLACEHOLDER_API_KEY: &str = "MY_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every client instance.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration:
///
/// ```toml
/// api_key = "abc123"
/// env_var = "MY_MARKET_NEWS_API_KEY"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Locally configured API key. Consulted after an explicit key, before the environment.
    pub api_key: Option<String>,
    /// Name of the environment variable holding the API key.
    pub env_var: String,
    /// Base URL for report requests. Slugs are concatenated onto it.
    pub report_base_url: String,
    /// URL that market queries are posted to.
    pub market_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            env_var: DEFAULT_API_KEY_ENV.to_string(),
            report_base_url: DEFAULT_REPORT_BASE_URL.to_string(),
            market_base_url: DEFAULT_MARKET_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| Error::Configuration(format!("invalid config: {}", e)))?;
        if config.timeout_secs == 0 {
            return Err(Error::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Points both endpoints at a single server. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.report_base_url = format!("{}/services/v1.2/reports/", base);
        self.market_base_url = format!("{}/get_external_api/result", base);
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_env_var(mut self, env_var: &str) -> Self {
        self.env_var = env_var.to_string();
        self
    }
}
