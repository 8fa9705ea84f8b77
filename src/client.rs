//! Session configuration for the Dayforce API.
//!
//! A [`Client`] holds everything that identifies one logical connection:
//! the base host URL, the company (tenant) identifier, the API version,
//! and any transport passthrough configuration. Calling [`Client::api`]
//! with credentials produces an authenticated [`Api`] session.
//!
//! # Example
//!
//! ```no_run
//! use dayforce_api::{Client, HttpConfig};
//! use std::time::Duration;
//!
//! # fn example() -> dayforce_api::Result<()> {
//! let api = Client::new("https://www.dayforcehcm.com", "acme")
//!     .version("v1")
//!     .http_config(HttpConfig {
//!         timeout: Duration::from_secs(10),
//!         ..Default::default()
//!     })
//!     .api("username", "password")?;
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

use crate::api::Api;
use crate::credentials::SecretString;
use crate::error::Result;
use crate::http_client::{HttpClient, HttpConfig};

/// Connection configuration for one Dayforce tenant.
///
/// Immutable once sessions are created from it; the transport
/// configuration is passthrough only: the mandatory authentication and
/// base-URL settings are applied from dedicated fields and cannot be
/// overridden by it.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    company: String,
    version: String,
    config: HttpConfig,
}

impl Client {
    /// Creates a new client for the given host URL and company
    /// (tenant) identifier. The API version defaults to `"v1"`.
    pub fn new(url: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            company: company.into(),
            version: "v1".to_string(),
            config: HttpConfig::default(),
        }
    }

    /// Sets the API version segment of the base URL.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the transport passthrough configuration (timeouts,
    /// user-agent, proxy). Augments the mandatory settings; it cannot
    /// replace authentication or the base URL.
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configured host URL, as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the composed base request URL:
    /// `{url}/Api/{company}/{version}/`, with the input's trailing slash
    /// normalized away first.
    pub fn base_url(&self) -> String {
        let url = self.url.trim_end_matches('/');
        format!("{url}/Api/{}/{}/", self.company, self.version)
    }

    /// Builds an authenticated API session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be constructed
    /// (for example, an invalid proxy URL in the passthrough
    /// configuration).
    pub fn api(&self, username: impl Into<String>, password: impl Into<SecretString>) -> Result<Api> {
        let http = HttpClient::new(
            self.base_url(),
            username.into(),
            password.into(),
            self.config.clone(),
        )?;
        Ok(Api::new(http))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_composition() {
        let client = Client::new("https://host", "acme");
        assert_eq!(client.base_url(), "https://host/Api/acme/v1/");
    }

    #[test]
    fn base_url_normalizes_trailing_slash() {
        let client = Client::new("https://host/", "acme");
        assert_eq!(client.base_url(), "https://host/Api/acme/v1/");
    }

    #[test]
    fn version_setter_changes_base_url() {
        let client = Client::new("https://host", "acme").version("v2");
        assert_eq!(client.base_url(), "https://host/Api/acme/v2/");
    }

    #[test]
    fn url_accessor_returns_input() {
        let client = Client::new("https://host/", "acme");
        assert_eq!(client.url(), "https://host/");
    }

    #[test]
    fn api_builds_session_with_base_url() {
        let client = Client::new("https://host", "acme");
        let api = client.api("user", "pass").expect("session should build");
        assert_eq!(api.http().base_url(), "https://host/Api/acme/v1/");
    }

    #[test]
    fn http_config_is_passed_through() {
        use std::time::Duration;

        let config = HttpConfig {
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        let client = Client::new("https://host", "acme").http_config(config);
        let api = client.api("user", "pass").expect("session should build");
        assert_eq!(api.http().config().timeout, Duration::from_secs(5));
    }
}
