//! Error handling for the Dayforce API client.
//!
//! ## Design
//!
//! The taxonomy follows three failure surfaces:
//!
//! ```text
//! Error
//! ├── Api      - the remote API reported a failure (error status or empty envelope)
//! ├── Network  - the transport failed before a status was available
//! └── Decode   - the response body was not valid JSON
//! ```
//!
//! `Api` carries an [`ApiErrorKind`] discriminant: `Domain` for error
//! statuses reported by the remote system, `NoData` for 2xx responses whose
//! envelope lacks the `Data` payload. Both share the same detail payload
//! (status, body, optional transport source), so callers that only care
//! about "the API call failed" match on `Error::Api` and callers that need
//! the distinction check [`Error::is_no_data`].
//!
//! All classification happens once, inside
//! [`HttpClient`](crate::http_client::HttpClient); endpoint methods never
//! catch or reclassify.
//!
//! # Example
//!
//! ```rust
//! use dayforce_api::error::Error;
//!
//! let err = Error::no_data(200, "{}".to_string());
//! assert!(err.is_no_data());
//! assert_eq!(err.status(), Some(200));
//! ```

use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::envelope;

/// Result type alias for all Dayforce API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed message attached to empty-envelope failures.
pub(crate) const NO_DATA_MESSAGE: &str = "No data returned in Dayforce API response.";

/// The primary error type for the `dayforce-api` crate.
///
/// Large variants are boxed to keep the enum small on the happy path.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The remote API reported a failure: an error status code, or a 2xx
    /// response whose envelope carried no `Data` payload.
    #[error("Dayforce API error: {0}")]
    Api(Box<ApiErrorDetails>),

    /// The transport failed before an HTTP status was available
    /// (connection refused, DNS failure, protocol error).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not valid JSON. This is propagated unchanged:
    /// an unparseable body indicates a contract violation the caller must
    /// see, not a condition to paper over.
    #[error("Decode error: {message}")]
    Decode {
        /// What was being decoded when the failure occurred.
        message: String,
        /// The underlying JSON parse error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Discriminant for [`ApiErrorDetails`].
///
/// An explicit tag over a common payload: every no-data failure is also an
/// API failure, so both kinds share status, body, and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The remote system rejected the call with an error status.
    Domain,
    /// The call succeeded at the transport level, but the envelope carried
    /// no `Data` payload.
    NoData,
}

/// Details for API-reported failures.
///
/// Extracted to a separate struct and boxed to keep the `Error` enum small.
#[derive(Debug)]
#[non_exhaustive]
pub struct ApiErrorDetails {
    /// Whether this is a domain failure or a no-data condition.
    pub kind: ApiErrorKind,
    /// HTTP status code of the response that produced this error.
    pub status: u16,
    /// Human-readable message.
    pub message: String,
    /// Raw response body, kept for inspection and diagnostics.
    pub body: String,
    /// The underlying transport error. Present for domain failures
    /// (the transport saw the error status); absent for the no-data
    /// condition, which the transport considers a success.
    pub source: Option<reqwest::Error>,
}

impl ApiErrorDetails {
    /// Extracts the `processResults` diagnostic list from the response body.
    ///
    /// Best-effort: if the body is not valid JSON, or valid JSON without a
    /// `processResults` array, this returns an empty vec. The secondary
    /// decode failure never masks the primary error.
    pub fn process_results(&self) -> Vec<Value> {
        envelope::process_results(&self.body)
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status: {})", self.message, self.status)
    }
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a domain error from an error-status response.
    pub fn domain(status: u16, body: String, source: Option<reqwest::Error>) -> Self {
        Self::Api(Box::new(ApiErrorDetails {
            kind: ApiErrorKind::Domain,
            status,
            message: format!("Dayforce API returned status {status}"),
            body,
            source,
        }))
    }

    /// Creates a no-data error from a 2xx response whose envelope carried
    /// no `Data` payload.
    pub fn no_data(status: u16, body: String) -> Self {
        Self::Api(Box::new(ApiErrorDetails {
            kind: ApiErrorKind::NoData,
            status,
            message: NO_DATA_MESSAGE.to_string(),
            body,
            source: None,
        }))
    }

    /// Creates a network error from a transport failure.
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network(source)
    }

    /// Creates a decode error from a JSON parse failure.
    pub fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a decode error for a structurally unexpected payload.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    // ==================== Inspection Methods ====================

    /// Returns `true` for the no-data specialization of an API error.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::Api(details) if details.kind == ApiErrorKind::NoData)
    }

    /// Returns the HTTP status code that produced this error, when known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(details) => Some(details.status),
            Self::Network(source) => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }

    /// Returns the `processResults` diagnostic list from the failing
    /// response, or an empty vec when none is available.
    pub fn process_results(&self) -> Vec<Value> {
        match self {
            Self::Api(details) => details.process_results(),
            _ => Vec::new(),
        }
    }
}
