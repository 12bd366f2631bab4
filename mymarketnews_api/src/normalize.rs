//! Input normalization: maps free-form user input onto the casing and
//! vocabulary the market endpoint expects.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::{
    reference::{
        all_commodities, validate_membership, CommodityCategory, COMMODITY_CLASSES,
        COMMODITY_REGIONS,
    },
    Error,
};

/// Date format used on the wire, in both report URLs and market payloads.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

const ORGANIC_POSITIVES: &[&str] = &["Yes", "True", "Y", "T", "1", "All Organic"];
const ORGANIC_NEGATIVES: &[&str] = &["No", "False", "N", "F", "0", "No Organic"];
const ORGANIC_OTHER: &[&str] = &["All"];

/// A value checked against one of the fixed reference vocabularies.
///
/// Only this module constructs these; holding one means validation passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedValue(String);

impl NormalizedValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NormalizedValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Title-cases every whitespace-separated token on its own:
/// `"LETTUCE, GREEN LEAF"` becomes `"Lettuce, Green Leaf"`.
pub fn normalize_commodity(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cases, then upper-cases the first character only.
pub fn normalize_class(s: &str) -> String {
    capitalize(s)
}

/// Lower-cases, then upper-cases the first character only.
pub fn normalize_region(s: &str) -> String {
    capitalize(s)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper-cases `input` and checks it against the six commodity lists.
/// Returns the canonical entry and the list it came from.
pub fn validate_commodity(input: &str) -> Result<(NormalizedValue, CommodityCategory), Error> {
    let upper = input.trim().to_uppercase();
    match CommodityCategory::of(&upper) {
        Some(category) => Ok((NormalizedValue(upper), category)),
        None => Err(Error::invalid_value(
            "commodity",
            input,
            all_commodities().join(", "),
        )),
    }
}

pub fn validate_class(input: &str) -> Result<NormalizedValue, Error> {
    validate_upper("class", input, COMMODITY_CLASSES)
}

pub fn validate_region(input: &str) -> Result<NormalizedValue, Error> {
    validate_upper("region", input, COMMODITY_REGIONS)
}

fn validate_upper(
    field: &'static str,
    input: &str,
    reference: &[&str],
) -> Result<NormalizedValue, Error> {
    let upper = input.trim().to_uppercase();
    if validate_membership(&upper, reference) {
        Ok(NormalizedValue(upper))
    } else {
        let mut allowed = reference.to_vec();
        allowed.sort_unstable();
        Err(Error::invalid_value(field, input, allowed.join(", ")))
    }
}

/// Organic filter input: a flag or one of the accepted spellings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrganicInput {
    Flag(bool),
    Text(String),
}

impl From<bool> for OrganicInput {
    fn from(flag: bool) -> Self {
        OrganicInput::Flag(flag)
    }
}

impl From<&str> for OrganicInput {
    fn from(text: &str) -> Self {
        OrganicInput::Text(text.to_string())
    }
}

impl From<String> for OrganicInput {
    fn from(text: String) -> Self {
        OrganicInput::Text(text)
    }
}

impl TryFrom<&Value> for OrganicInput {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(flag) => Ok(OrganicInput::Flag(*flag)),
            Value::String(text) => Ok(OrganicInput::Text(text.clone())),
            other => Err(Error::TypeMismatch {
                field: "organic",
                expected: "str or bool",
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

/// Maps an organic flag onto the three-valued `Yes` / `No` / `All` state.
pub fn normalize_organic(input: impl Into<OrganicInput>) -> Result<NormalizedValue, Error> {
    let text = match input.into() {
        OrganicInput::Flag(true) => return Ok(NormalizedValue("Yes".to_string())),
        OrganicInput::Flag(false) => return Ok(NormalizedValue("No".to_string())),
        OrganicInput::Text(text) => text,
    };

    let capitalized = capitalize(text.trim());
    let in_set = |set: &[&str]| set.iter().any(|candidate| capitalize(candidate) == capitalized);

    let state = if in_set(ORGANIC_POSITIVES) {
        "Yes"
    } else if in_set(ORGANIC_NEGATIVES) {
        "No"
    } else if in_set(ORGANIC_OTHER) {
        "All"
    } else {
        let allowed = ORGANIC_POSITIVES
            .iter()
            .chain(ORGANIC_NEGATIVES)
            .chain(ORGANIC_OTHER)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::invalid_value("organic", text, allowed));
    };
    Ok(NormalizedValue(state.to_string()))
}

/// A date as given by the caller: typed, or already formatted as `MM/DD/YYYY`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        DateInput::DateTime(datetime)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl TryFrom<&Value> for DateInput {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(DateInput::Text(text.clone())),
            other => Err(Error::TypeMismatch {
                field: "date",
                expected: "str, date, or datetime",
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

/// Formats typed dates as `MM/DD/YYYY`. Text is validated against that
/// format and returned unchanged.
pub fn normalize_date(field: &'static str, input: impl Into<DateInput>) -> Result<String, Error> {
    match input.into() {
        DateInput::Date(date) => Ok(date.format(DATE_FORMAT).to_string()),
        DateInput::DateTime(datetime) => Ok(datetime.format(DATE_FORMAT).to_string()),
        DateInput::Text(text) => match NaiveDate::parse_from_str(&text, DATE_FORMAT) {
            Ok(_) => Ok(text),
            Err(_) => Err(Error::invalid_value(field, text, "a date in the format MM/DD/YYYY")),
        },
    }
}

/// Today's local date in the wire format.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
