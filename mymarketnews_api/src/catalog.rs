//! Endpoint methods: single reports, the published-report listing, and
//! market queries.

use std::str::FromStr;

use serde_json::Value;

use crate::{
    types::{Record, ReportSummary, Table},
    ApiRequest, Client, Error, MarketQuery, ReportQuery,
};

/// Which report dates [`Client::report_dates`] returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateSelection {
    /// The `report_begin_date` of the first row only.
    Recent,
    /// Every distinct `report_begin_date`, in the order the rows carry them.
    All,
}

impl FromStr for DateSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(DateSelection::Recent),
            "all" | "all dates" => Ok(DateSelection::All),
            _ => Err(Error::invalid_value("date_selection", s, "recent, all")),
        }
    }
}

impl Client {
    /// Fetches one report document.
    pub async fn get_report(&self, query: &ReportQuery) -> Result<Value, Error> {
        self.fetch(&ApiRequest::Report(query.clone())).await
    }

    /// Runs a market query and returns its result rows.
    pub async fn query_market(&self, query: &MarketQuery) -> Result<Table, Error> {
        let results = self.fetch(&ApiRequest::Market(query.clone())).await?;
        Ok(Table::from_json(&results))
    }

    /// Lists every currently published report.
    pub async fn current_reports(&self) -> Result<Vec<ReportSummary>, Error> {
        let doc = self.get_report(&ReportQuery::listing()).await?;
        let items = match doc {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<ReportSummary>(item).map_err(|e| {
                    tracing::error!("Failed to parse report listing entry: {}", e);
                    Error::RequestFailed(format!("failed to parse report listing: {}", e))
                })
            })
            .collect()
    }

    /// Whether a report with this slug exists.
    ///
    /// The API answers unknown slugs with a document carrying `message` and no
    /// `results`, or with a 404.
    pub async fn report_exists(&self, slug_id: &str) -> Result<bool, Error> {
        match self.get_report(&ReportQuery::new(slug_id)).await {
            Ok(Value::Object(map)) => Ok(map.contains_key("results")),
            Ok(Value::Array(items)) => Ok(!items.is_empty()),
            Ok(_) => Ok(false),
            Err(Error::RemoteRequest { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Report dates available for a slug.
    pub async fn report_dates(
        &self,
        slug_id: &str,
        selection: DateSelection,
    ) -> Result<Vec<String>, Error> {
        let doc = self.get_report(&ReportQuery::new(slug_id)).await?;
        Ok(select_dates(&Table::from_json(&doc), selection))
    }

    /// Column names of a report's rows.
    pub async fn report_fields(&self, slug_id: &str) -> Result<Vec<String>, Error> {
        let doc = self.get_report(&ReportQuery::new(slug_id)).await?;
        Ok(Table::from_json(&doc).columns())
    }

    /// Values of one field across the rows of a single report date.
    ///
    /// Rows lacking the field yield `null`.
    pub async fn report_field_values(
        &self,
        slug_id: &str,
        begin_date: &str,
        field: &str,
    ) -> Result<Vec<Value>, Error> {
        let query = ReportQuery::new(slug_id).with_begin_date(begin_date);
        let doc = self.get_report(&query).await?;
        Ok(Table::from_json(&doc)
            .column(field)
            .into_iter()
            .map(|v| v.cloned().unwrap_or(Value::Null))
            .collect())
    }

    /// The listing entry for a slug, if it is currently published.
    pub async fn report_info(&self, slug_id: &str) -> Result<Option<ReportSummary>, Error> {
        let reports = self.current_reports().await?;
        Ok(reports.into_iter().find(|r| r.slug_id == slug_id))
    }

    pub async fn report_title(&self, slug_id: &str) -> Result<Option<String>, Error> {
        Ok(self
            .report_info(slug_id)
            .await?
            .and_then(|r| r.title().map(str::to_string)))
    }

    pub async fn report_slug_name(&self, slug_id: &str) -> Result<Option<String>, Error> {
        Ok(self.report_info(slug_id).await?.and_then(|r| r.slug_name))
    }
}

fn select_dates(table: &Table, selection: DateSelection) -> Vec<String> {
    let dates = table.iter().filter_map(begin_date);
    match selection {
        DateSelection::Recent => dates.take(1).collect(),
        DateSelection::All => {
            let mut seen: Vec<String> = Vec::new();
            for date in dates {
                if !seen.contains(&date) {
                    seen.push(date);
                }
            }
            seen
        }
    }
}

fn begin_date(row: &Record) -> Option<String> {
    match row.get("report_begin_date")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table() -> Table {
        Table::from_json(&json!({
            "results": [
                {"report_begin_date": "07/20/2021", "commodity": "Butter"},
                {"report_begin_date": "07/20/2021", "commodity": "Cheese"},
                {"report_begin_date": "07/13/2021", "commodity": "Butter"},
                {"commodity": "Cheese"}
            ]
        }))
    }

    #[test]
    fn recent_takes_first_row() {
        assert_eq!(select_dates(&table(), DateSelection::Recent), vec!["07/20/2021"]);
    }

    #[test]
    fn all_is_distinct_in_order() {
        assert_eq!(
            select_dates(&table(), DateSelection::All),
            vec!["07/20/2021", "07/13/2021"]
        );
    }

    #[test]
    fn empty_table_has_no_dates() {
        assert!(select_dates(&Table::default(), DateSelection::Recent).is_empty());
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("recent".parse::<DateSelection>().unwrap(), DateSelection::Recent);
        assert_eq!("ALL".parse::<DateSelection>().unwrap(), DateSelection::All);
        assert!(matches!(
            "latest".parse::<DateSelection>(),
            Err(Error::InvalidValue { .. })
        ));
    }
}
