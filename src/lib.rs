//! Dayforce API Client
//!
//! Client library for the Dayforce HR/workforce-management REST API:
//! employee records, schedules, availability, compensation, time-away
//! entries, and report metadata, exposed through a small set of typed
//! methods.
//!
//! # Features
//!
//! - **Typed failures**: error statuses, empty envelopes, and malformed
//!   bodies each surface as a distinct [`Error`](error::Error) shape
//! - **Single-attempt semantics**: no retries, no backoff, no caching;
//!   every call is one HTTP round-trip and every failure reaches the caller
//! - **Stateless sessions**: an [`Api`] holds only immutable configuration
//!   and may serve concurrent calls
//! - **Safe credentials**: passwords are zeroized on drop and redacted in
//!   `Debug` output
//!
//! # Example
//!
//! ```rust,no_run
//! use dayforce_api::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let api = Client::new("https://www.dayforcehcm.com", "acme").api("user", "pass")?;
//!
//! let employees = api.get_employees(&[]).await?;
//!
//! match api.get_employee_time_away(&employees[0]).await {
//!     Ok(entries) => println!("{entries}"),
//!     Err(e) if e.is_no_data() => println!("no time-away entries"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Re-exports of external dependencies
pub use chrono;
pub use serde_json;

// Core modules
pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub(crate) mod envelope;
pub mod error;
pub mod http_client;
pub mod time;

// Re-exports of core types for convenience
pub use api::Api;
pub use client::Client;
pub use config::ProxyConfig;
pub use credentials::SecretString;
pub use error::{ApiErrorDetails, ApiErrorKind, Error, Result};
pub use http_client::{HttpClient, HttpConfig};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use dayforce_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::Api;
    pub use crate::client::Client;
    pub use crate::config::ProxyConfig;
    pub use crate::credentials::SecretString;
    pub use crate::error::{ApiErrorKind, Error, Result};
    pub use crate::http_client::{HttpClient, HttpConfig};
    pub use crate::time::{format_filter_date, FILTER_DATE_FORMAT};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "dayforce-api");
    }
}
