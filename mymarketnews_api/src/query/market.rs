use serde::Serialize;

use crate::{
    config::ClientConfig,
    credentials::ApiMode,
    normalize::{
        normalize_class, normalize_commodity, normalize_date, normalize_organic, normalize_region,
        DateInput, OrganicInput,
    },
    Error,
};

use super::{BuiltRequest, Query};

/// Constant discriminator the market endpoint requires in every payload.
pub const MARKET_TYPE: &str = "/3/";

/// JSON body posted to the market endpoint.
///
/// Commodity travels as `COMD` and class as `CLASS`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MarketPayload {
    #[serde(rename = "MT")]
    pub market_type: &'static str,
    #[serde(rename = "COMD", skip_serializing_if = "Option::is_none")]
    pub commodity: Option<String>,
    #[serde(rename = "CLASS", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "REGN", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "ORGC", skip_serializing_if = "Option::is_none")]
    pub organic: Option<String>,
    #[serde(rename = "DATE", skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<String>>,
}

/// POST query against the fruit and vegetable market endpoint.
///
/// Values are taken as given and only re-cased here; membership in the
/// reference lists is checked by [`Market`](crate::Market) setters.
#[derive(Clone, Debug, Default)]
pub struct MarketQuery {
    pub commodity: Option<String>,
    pub class: Option<String>,
    pub region: Option<String>,
    pub organic: Option<OrganicInput>,
    pub begin_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
}

impl Query for MarketQuery {
    fn mode(&self) -> ApiMode {
        ApiMode::Market
    }

    fn build(&self, config: &ClientConfig) -> Result<BuiltRequest, Error> {
        let payload = self.payload()?;
        let payload = serde_json::to_value(&payload)
            .map_err(|e| Error::RequestFailed(format!("failed to encode payload: {}", e)))?;
        Ok(BuiltRequest {
            mode: ApiMode::Market,
            url: config.market_base_url.clone(),
            payload: Some(payload),
        })
    }
}

impl MarketQuery {
    /// Normalizes the held fields into the wire payload.
    ///
    /// `DATE` carries `[begin, end]` when both are set and `[begin]` when only
    /// the begin date is; an end date alone is not sent.
    pub fn payload(&self) -> Result<MarketPayload, Error> {
        let organic = match &self.organic {
            Some(organic) => Some(normalize_organic(organic.clone())?.into_string()),
            None => None,
        };
        let begin = match &self.begin_date {
            Some(begin) => Some(normalize_date("begin_date", begin.clone())?),
            None => None,
        };
        let end = match &self.end_date {
            Some(end) => Some(normalize_date("end_date", end.clone())?),
            None => None,
        };
        let dates = begin.map(|begin| match end {
            Some(end) => vec![begin, end],
            None => vec![begin],
        });

        Ok(MarketPayload {
            market_type: MARKET_TYPE,
            commodity: self.commodity.as_deref().map(normalize_commodity),
            class: self.class.as_deref().map(normalize_class),
            region: self.region.as_deref().map(normalize_region),
            organic,
            dates,
        })
    }

    pub fn with_commodity(mut self, commodity: &str) -> Self {
        self.commodity = Some(commodity.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_organic(mut self, organic: impl Into<OrganicInput>) -> Self {
        self.organic = Some(organic.into());
        self
    }

    pub fn with_begin_date(mut self, begin_date: impl Into<DateInput>) -> Self {
        self.begin_date = Some(begin_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<DateInput>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }
}
