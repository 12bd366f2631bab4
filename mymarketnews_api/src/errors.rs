//! Error types for the API client.

/// Errors that can occur when configuring the client, validating inputs or
/// making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No usable API key, or the configuration file could not be read.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// An input had the wrong type for the field it was assigned to.
    #[error("{field} must be of type {expected}, not {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
    /// An input had the right type but a value outside the allowed set or format.
    #[error("{field} must be one of the following: {allowed}, not {value:?}")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: String,
    },
    /// A request mode other than `report` or `market` was requested.
    #[error("Unsupported request mode {0:?}, expected \"report\" or \"market\"")]
    UnsupportedMode(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    RemoteRequest { status: u16, body: String },
    /// An HTTP request failed (network error, timeout, bad URL or undecodable body).
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl Error {
    pub(crate) fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Error::InvalidValue {
            field,
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}
