use url::form_urlencoded;

use crate::{
    config::ClientConfig,
    credentials::ApiMode,
    normalize::{normalize_date, DateInput},
    Error,
};

use super::{BuiltRequest, Query};

/// GET query for one published report.
///
/// The report API takes its date filter inside a single `q` parameter, so the
/// URL is composed by hand rather than through `query_pairs_mut`, which would
/// percent-encode the `=` and `/` the API expects verbatim.
#[derive(Clone, Debug, Default)]
pub struct ReportQuery {
    pub slug: String,
    pub begin_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    pub key: Option<String>,
}

impl Query for ReportQuery {
    fn mode(&self) -> ApiMode {
        ApiMode::Report
    }

    fn build(&self, config: &ClientConfig) -> Result<BuiltRequest, Error> {
        let mut url = format!("{}{}", config.report_base_url, self.slug.trim());
        let mut has_query = false;

        if let Some(begin) = &self.begin_date {
            let begin = normalize_date("begin_date", begin.clone())?;
            url.push_str(&format!("?q=report_begin_date={}", begin));
            has_query = true;
        }
        if let Some(end) = &self.end_date {
            let end = normalize_date("end_date", end.clone())?;
            if has_query {
                url.push_str(&format!("&report_end_date={}", end));
            } else {
                url.push_str(&format!("?q=report_end_date={}", end));
            }
            has_query = true;
        }
        if let Some(key) = &self.key {
            url.push(if has_query { '&' } else { '?' });
            url.push_str("key=");
            url.extend(form_urlencoded::byte_serialize(key.as_bytes()));
        }

        Ok(BuiltRequest {
            mode: ApiMode::Report,
            url,
            payload: None,
        })
    }
}

impl ReportQuery {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Default::default()
        }
    }

    /// Query for the listing of every currently published report.
    pub fn listing() -> Self {
        Self::default()
    }

    pub fn with_begin_date(mut self, begin_date: impl Into<DateInput>) -> Self {
        self.begin_date = Some(begin_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<DateInput>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Appends a `key=` override to the URL, independent of Basic auth.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }
}
