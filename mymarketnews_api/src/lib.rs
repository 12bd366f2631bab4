//! Client for the USDA AMS MyMarketNews API.
//!
//! Two endpoint families are covered: published reports (`GET`, Basic auth)
//! and fruit and vegetable market queries (`POST`, JSON, no auth). The
//! [`Report`] and [`Market`] facades hold the parameters of one query and
//! expose the results as a [`Table`](types::Table).
mod catalog;
mod client;
pub mod config;
pub mod credentials;
mod errors;
mod market;
pub mod normalize;
mod query;
pub mod reference;
mod report;
pub mod types;
pub use self::catalog::DateSelection;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::credentials::{ApiMode, Credential};
pub use self::errors::Error;
pub use self::market::{Market, MarketBuilder};
pub use self::query::{
    ApiRequest, BuiltRequest, MarketPayload, MarketQuery, Query, ReportQuery, MARKET_TYPE,
};
pub use self::report::Report;
