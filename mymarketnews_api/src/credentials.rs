//! API key resolution.
//!
//! The key is resolved once, when a [`Client`](crate::Client) is built, and
//! stays with that client. Nothing here writes to the process environment.

use std::fmt;
use std::str::FromStr;

use crate::{
    config::{ClientConfig, PLACEHOLDER_API_KEY},
    Error,
};

/// Which remote surface a client talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMode {
    /// Single published reports, fetched with an authenticated GET.
    Report,
    /// Market queries, posted as JSON without authentication.
    Market,
}

impl FromStr for ApiMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "report" | "single" => Ok(ApiMode::Report),
            "market" => Ok(ApiMode::Market),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Report => write!(f, "report"),
            ApiMode::Market => write!(f, "market"),
        }
    }
}

/// An API key. Immutable once resolved; `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// Resolves the API key for `mode`, reading the environment variable named
/// by `config.env_var` as the last resort.
///
/// Market mode needs no key and always yields `Ok(None)`.
pub fn resolve(
    explicit: Option<&str>,
    mode: ApiMode,
    config: &ClientConfig,
) -> Result<Option<Credential>, Error> {
    resolve_with(explicit, mode, config, |name| std::env::var(name).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
///
/// Priority: explicit key, then `config.api_key`, then `env(config.env_var)`.
/// Empty values and the `MY_API_KEY` placeholder are skipped at every level.
pub fn resolve_with<F>(
    explicit: Option<&str>,
    mode: ApiMode,
    config: &ClientConfig,
    env: F,
) -> Result<Option<Credential>, Error>
where
    F: Fn(&str) -> Option<String>,
{
    if mode == ApiMode::Market {
        return Ok(None);
    }

    let from_env = env(config.env_var.as_str());
    let candidates = [
        ("explicit argument", explicit),
        ("configuration", config.api_key.as_deref()),
        ("environment", from_env.as_deref()),
    ];

    for (source, candidate) in candidates {
        match candidate.map(str::trim) {
            Some(key) if usable(key) => {
                tracing::debug!("Using API key from {}", source);
                return Ok(Some(Credential(key.to_string())));
            }
            Some(key) if key == PLACEHOLDER_API_KEY => {
                tracing::warn!("Ignoring placeholder API key from {}", source);
            }
            _ => {}
        }
    }

    Err(Error::Configuration(format!(
        "You must provide an API key, either in the configuration file, as the {} environment \
         variable, or by passing it directly",
        config.env_var
    )))
}

fn usable(key: &str) -> bool {
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}
