//! Rows of the published-report listing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the published-report listing.
///
/// Only the identifying fields are typed; everything else the API sends is
/// kept in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportSummary {
    /// Report identifier. The API sends it as either a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub slug_id: String,

    pub slug_name: Option<String>,

    pub report_title: Option<String>,

    pub published_date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReportSummary {
    /// `report_title`, or the older `title` field when that is all there is.
    pub fn title(&self) -> Option<&str> {
        self.report_title
            .as_deref()
            .or_else(|| self.extra.get("title").and_then(Value::as_str))
    }

    /// Looks up a field by its wire name, typed or not.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "slug_id" => Some(Value::String(self.slug_id.clone())),
            "slug_name" => self.slug_name.clone().map(Value::String),
            "report_title" => self.report_title.clone().map(Value::String),
            "published_date" => self.published_date.clone().map(Value::String),
            other => self.extra.get(other).cloned(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
