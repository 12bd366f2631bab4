//! HTTP transport for the MyMarketNews report and market endpoints.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    credentials::{self, ApiMode, Credential},
    query::{ApiRequest, BuiltRequest, Query},
    Error,
};

/// HTTP client for the MyMarketNews API.
///
/// Each client owns its resolved credential and configuration. Report
/// requests are sent as GET with Basic auth (the key as username, an empty
/// password); market requests are posted as JSON without authentication.
/// Every call is a single attempt.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    credential: Option<Credential>,
}

impl Client {
    /// Creates a client for `mode`, resolving the API key from `explicit_key`,
    /// the configuration and the environment, in that order.
    pub fn new(
        config: ClientConfig,
        explicit_key: Option<&str>,
        mode: ApiMode,
    ) -> Result<Self, Error> {
        let credential = credentials::resolve(explicit_key, mode, &config)?;
        Self::with_credential(config, credential)
    }

    /// Creates a report client. Fails with [`Error::Configuration`] when no key can be found.
    pub fn for_reports(config: ClientConfig, explicit_key: Option<&str>) -> Result<Self, Error> {
        Self::new(config, explicit_key, ApiMode::Report)
    }

    /// Creates a market client. Market queries need no key.
    pub fn for_market(config: ClientConfig) -> Result<Self, Error> {
        Self::with_credential(config, None)
    }

    /// Creates a client around an already resolved credential.
    pub fn with_credential(
        config: ClientConfig,
        credential: Option<Credential>,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            config,
            credential,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Builds and sends `request`.
    ///
    /// Report requests return the whole JSON document. Market requests return
    /// the `results` array, or an empty array when the response has none.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value, Error> {
        let built = request.build(&self.config)?;
        self.send(&built).await
    }

    /// Sends an already built request.
    pub async fn send(&self, built: &BuiltRequest) -> Result<Value, Error> {
        let url = Url::parse(&built.url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(format!("invalid URL {}: {}", built.url, e))
        })?;

        match built.mode {
            ApiMode::Report => {
                let credential = self.credential.as_ref().ok_or_else(|| {
                    Error::Configuration("report requests require an API key".to_string())
                })?;
                tracing::debug!("GET {}", url);
                let request = self
                    .http
                    .get(url)
                    .basic_auth(credential.expose(), Some(""))
                    .header("accept", "application/json");
                self.execute(request).await
            }
            ApiMode::Market => {
                tracing::debug!("POST {}", url);
                let mut request = self.http.post(url).header("accept", "application/json");
                if let Some(payload) = &built.payload {
                    request = request.json(payload);
                }
                let body = self.execute(request).await?;
                Ok(match body {
                    Value::Object(mut map) => match map.remove("results") {
                        Some(results @ Value::Array(_)) => results,
                        _ => Value::Array(Vec::new()),
                    },
                    _ => Value::Array(Vec::new()),
                })
            }
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::RemoteRequest {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed(format!("failed to parse response: {}", e))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
