//! Facade over a parameterized market query.

use serde_json::Value;

use crate::{
    normalize::{
        json_type_name, normalize_date, normalize_organic, today, validate_class, validate_commodity,
        validate_region, DateInput, NormalizedValue, OrganicInput,
    },
    types::Table,
    ApiRequest, Client, Error, MarketQuery,
};

/// Market query state plus the rows of the last successful refresh.
///
/// Each setter validates one field and leaves it untouched on error.
/// [`refresh_data`](Market::refresh_data) replaces the stored rows
/// wholesale on success and keeps the previous rows on failure.
pub struct Market {
    client: Client,
    commodity: Option<NormalizedValue>,
    region: Option<NormalizedValue>,
    class: Option<NormalizedValue>,
    organic: Option<NormalizedValue>,
    begin_date: Option<String>,
    end_date: Option<String>,
    data: Table,
}

impl Market {
    /// Creates an empty market query. Nothing is fetched until
    /// [`refresh_data`](Market::refresh_data).
    pub fn new(client: Client) -> Self {
        Self {
            client,
            commodity: None,
            region: None,
            class: None,
            organic: None,
            begin_date: None,
            end_date: None,
            data: Table::default(),
        }
    }

    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }

    /// Sets the commodity, and the class to the commodity's category.
    pub fn set_commodity(&mut self, commodity: &str) -> Result<(), Error> {
        let (commodity, category) = validate_commodity(commodity)?;
        let class = validate_class(category.class_name())?;
        self.commodity = Some(commodity);
        self.class = Some(class);
        Ok(())
    }

    pub fn set_region(&mut self, region: &str) -> Result<(), Error> {
        self.region = Some(validate_region(region)?);
        Ok(())
    }

    pub fn set_class(&mut self, class: &str) -> Result<(), Error> {
        self.class = Some(validate_class(class)?);
        Ok(())
    }

    pub fn set_organic(&mut self, organic: impl Into<OrganicInput>) -> Result<(), Error> {
        self.organic = Some(normalize_organic(organic)?);
        Ok(())
    }

    /// Typed dates are formatted as `MM/DD/YYYY`; text must already be in that format.
    pub fn set_begin_date(&mut self, begin_date: impl Into<DateInput>) -> Result<(), Error> {
        self.begin_date = Some(normalize_date("begin_date", begin_date)?);
        Ok(())
    }

    /// `None` sets the end date to today.
    pub fn set_end_date(&mut self, end_date: Option<DateInput>) -> Result<(), Error> {
        self.end_date = Some(match end_date {
            Some(end_date) => normalize_date("end_date", end_date)?,
            None => today(),
        });
        Ok(())
    }

    pub fn commodity(&self) -> Option<&str> {
        self.commodity.as_ref().map(NormalizedValue::as_str)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(NormalizedValue::as_str)
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_ref().map(NormalizedValue::as_str)
    }

    pub fn organic(&self) -> Option<&str> {
        self.organic.as_ref().map(NormalizedValue::as_str)
    }

    pub fn begin_date(&self) -> Option<&str> {
        self.begin_date.as_deref()
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    /// The query the current field state describes.
    pub fn query(&self) -> MarketQuery {
        MarketQuery {
            commodity: self.commodity().map(str::to_string),
            class: self.class().map(str::to_string),
            region: self.region().map(str::to_string),
            organic: self.organic().map(OrganicInput::from),
            begin_date: self.begin_date().map(DateInput::from),
            end_date: self.end_date().map(DateInput::from),
        }
    }

    /// Fetches rows for the current fields and replaces the stored table.
    pub async fn refresh_data(&mut self) -> Result<(), Error> {
        let request = ApiRequest::Market(self.query());
        let results = self.client.fetch(&request).await?;
        self.data = Table::from_json(&results);
        tracing::debug!("Market refresh returned {} rows", self.data.len());
        Ok(())
    }

    /// Rows from the last successful refresh.
    pub fn data(&self) -> &Table {
        &self.data
    }
}

/// Collects market options and applies them through the [`Market`] setters,
/// in the order commodity, region, class, organic, begin date, end date.
///
/// An end date left unset stays unset, so the request carries only the begin date.
#[derive(Clone, Debug, Default)]
pub struct MarketBuilder {
    commodity: Option<String>,
    region: Option<String>,
    class: Option<String>,
    organic: Option<OrganicInput>,
    begin_date: Option<DateInput>,
    end_date: Option<DateInput>,
}

impl MarketBuilder {
    pub fn commodity(mut self, commodity: &str) -> Self {
        self.commodity = Some(commodity.to_string());
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn organic(mut self, organic: impl Into<OrganicInput>) -> Self {
        self.organic = Some(organic.into());
        self
    }

    pub fn begin_date(mut self, begin_date: impl Into<DateInput>) -> Self {
        self.begin_date = Some(begin_date.into());
        self
    }

    pub fn end_date(mut self, end_date: impl Into<DateInput>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Reads options from a JSON object with the keys `commodity`, `region`,
    /// `class_` (or `class`), `organic`, `begin_date` and `end_date`.
    /// Missing and `null` keys are skipped.
    pub fn from_json(params: &Value) -> Result<Self, Error> {
        let map = params.as_object().ok_or_else(|| Error::TypeMismatch {
            field: "params",
            expected: "object",
            found: json_type_name(params).to_string(),
        })?;
        let get = |key: &str| map.get(key).filter(|v| !v.is_null());

        let mut builder = Self::default();
        if let Some(value) = get("commodity") {
            builder.commodity = Some(expect_str("commodity", value)?);
        }
        if let Some(value) = get("region") {
            builder.region = Some(expect_str("region", value)?);
        }
        if let Some(value) = get("class_").or_else(|| get("class")) {
            builder.class = Some(expect_str("class", value)?);
        }
        if let Some(value) = get("organic") {
            builder.organic = Some(OrganicInput::try_from(value)?);
        }
        if let Some(value) = get("begin_date") {
            builder.begin_date = Some(DateInput::try_from(value)?);
        }
        if let Some(value) = get("end_date") {
            builder.end_date = Some(DateInput::try_from(value)?);
        }
        Ok(builder)
    }

    pub fn build(self, client: Client) -> Result<Market, Error> {
        let mut market = Market::new(client);
        if let Some(commodity) = &self.commodity {
            market.set_commodity(commodity)?;
        }
        if let Some(region) = &self.region {
            market.set_region(region)?;
        }
        if let Some(class) = &self.class {
            market.set_class(class)?;
        }
        if let Some(organic) = self.organic {
            market.set_organic(organic)?;
        }
        if let Some(begin_date) = self.begin_date {
            market.set_begin_date(begin_date)?;
        }
        if let Some(end_date) = self.end_date {
            market.set_end_date(Some(end_date))?;
        }
        Ok(market)
    }
}

fn expect_str(field: &'static str, value: &Value) -> Result<String, Error> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::TypeMismatch {
            field,
            expected: "str",
            found: json_type_name(value).to_string(),
        })
}
