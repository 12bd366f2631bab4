//! Facade over a single published report.

use std::fmt;

use serde_json::Value;

use crate::{query::Query, types::Table, ApiRequest, Client, Error, ReportQuery};

/// One published report, fetched on construction.
///
/// A `Report` always holds loaded data: if the first fetch fails no value is
/// produced, and a failed [`set_slug_id`](Report::set_slug_id) keeps the
/// previous slug and data.
pub struct Report {
    client: Client,
    query: ReportQuery,
    url: String,
    data: Value,
}

impl Report {
    /// Fetches the report identified by `slug_id`.
    pub async fn fetch(client: Client, slug_id: &str) -> Result<Self, Error> {
        Self::fetch_query(client, ReportQuery::new(slug_id)).await
    }

    /// Fetches a report with a date window or key override.
    pub async fn fetch_query(client: Client, query: ReportQuery) -> Result<Self, Error> {
        let (url, data) = load(&client, &query).await?;
        Ok(Self {
            client,
            query,
            url,
            data,
        })
    }

    /// Switches to another report and fetches it. The date window, if any, is kept.
    pub async fn set_slug_id(&mut self, slug_id: &str) -> Result<(), Error> {
        let query = ReportQuery {
            slug: slug_id.to_string(),
            ..self.query.clone()
        };
        let (url, data) = load(&self.client, &query).await?;
        self.query = query;
        self.url = url;
        self.data = data;
        Ok(())
    }

    pub fn slug_id(&self) -> &str {
        &self.query.slug
    }

    /// URL the current data was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The JSON document exactly as the API returned it.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Rows of the report.
    pub fn table(&self) -> Table {
        Table::from_json(&self.data)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report(slug_id={})", self.query.slug)
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

async fn load(client: &Client, query: &ReportQuery) -> Result<(String, Value), Error> {
    let built = query.build(client.config())?;
    tracing::debug!("Loading report {}", query.slug);
    let data = client.send(&built).await?;
    Ok((built.url, data))
}

impl From<&Report> for ApiRequest {
    fn from(report: &Report) -> Self {
        ApiRequest::Report(report.query.clone())
    }
}
