//! Shared query infrastructure: the [`Query`] trait and the [`ApiRequest`] variant.

use serde_json::Value;

use crate::{config::ClientConfig, credentials::ApiMode, Error};

use super::{MarketQuery, ReportQuery};

/// Trait implemented by all query builders. Turns typed parameters into a
/// concrete URL and, for POST endpoints, a JSON payload.
pub trait Query {
    /// Which endpoint family this query targets.
    fn mode(&self) -> ApiMode;

    /// Composes the target URL and payload against the configured endpoints.
    fn build(&self, config: &ClientConfig) -> Result<BuiltRequest, Error>;
}

/// A fully composed request, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltRequest {
    pub mode: ApiMode,
    pub url: String,
    /// JSON body. Present for market requests only.
    pub payload: Option<Value>,
}

/// One request to either endpoint family. Each variant carries only the
/// fields valid for its endpoint.
#[derive(Clone, Debug)]
pub enum ApiRequest {
    Report(ReportQuery),
    Market(MarketQuery),
}

impl Query for ApiRequest {
    fn mode(&self) -> ApiMode {
        match self {
            ApiRequest::Report(query) => query.mode(),
            ApiRequest::Market(query) => query.mode(),
        }
    }

    fn build(&self, config: &ClientConfig) -> Result<BuiltRequest, Error> {
        match self {
            ApiRequest::Report(query) => query.build(config),
            ApiRequest::Market(query) => query.build(config),
        }
    }
}

impl From<ReportQuery> for ApiRequest {
    fn from(query: ReportQuery) -> Self {
        ApiRequest::Report(query)
    }
}

impl From<MarketQuery> for ApiRequest {
    fn from(query: MarketQuery) -> Self {
        ApiRequest::Market(query)
    }
}
