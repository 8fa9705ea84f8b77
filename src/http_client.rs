//! HTTP request executor for the Dayforce API.
//!
//! Provides the single chokepoint where HTTP-level concerns are translated
//! into domain terms:
//! - issue a GET/POST against the session base URL with basic auth,
//! - classify error statuses into [`Error::Api`](crate::error::Error::Api),
//! - decode the JSON envelope,
//! - distinguish "no data" from "real data" on the GET path.
//!
//! Endpoint methods on [`Api`](crate::api::Api) delegate here and never
//! reclassify failures themselves.
//!
//! One attempt per call: retries, backoff, and per-call timeout overrides
//! are deliberately absent. Timeouts and proxying are configured once, at
//! session construction, through [`HttpConfig`].
//!
//! # Observability
//!
//! This module uses the `tracing` crate for structured logging. Key events:
//! - request initiation with method and path
//! - response status and body preview
//! - error statuses with structured fields

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::config::ProxyConfig;
use crate::credentials::SecretString;
use crate::envelope;
use crate::error::{Error, Result};

/// HTTP transport configuration, applied once at session construction.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to log request/response bodies at debug level.
    pub verbose: bool,
    /// Optional proxy configuration.
    pub proxy: Option<ProxyConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("dayforce-api/", env!("CARGO_PKG_VERSION")).to_string(),
            verbose: false,
            proxy: None,
        }
    }
}

/// Request executor bound to one authenticated Dayforce session.
///
/// Holds the base URL, credentials, and the underlying transport; carries
/// no per-call state, so one instance may serve concurrent calls.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    username: String,
    password: SecretString,
    config: HttpConfig,
}

impl HttpClient {
    /// Creates a new executor for the given base URL and credentials.
    ///
    /// `base_url` must end with a trailing slash; [`Client`](crate::client::Client)
    /// guarantees this when composing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy URL is invalid or the transport
    /// cannot be built.
    pub(crate) fn new(
        base_url: String,
        username: String,
        password: SecretString,
        config: HttpConfig,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = reqwest::Proxy::all(&proxy_config.url).map_err(Error::network)?;

            if let (Some(username), Some(password)) =
                (&proxy_config.username, &proxy_config.password)
            {
                proxy = proxy.basic_auth(username, password);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(Error::network)?;

        Ok(Self {
            client,
            base_url,
            username,
            password,
            config,
        })
    }

    /// Executes a GET request and returns the envelope's `Data` payload.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`](crate::error::Error::Api) with `Domain` kind when
    ///   the remote system reports an error status,
    /// - [`Error::Api`](crate::error::Error::Api) with `NoData` kind when
    ///   a 2xx envelope carries no `Data`,
    /// - [`Error::Decode`](crate::error::Error::Decode) when the body is
    ///   not valid JSON,
    /// - [`Error::Network`](crate::error::Error::Network) when the
    ///   transport fails before a status is available.
    #[instrument(name = "dayforce_get", skip(self, query), fields(path = %path))]
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let (status, body) = self
            .execute(request.basic_auth(&self.username, Some(self.password.expose_secret())))
            .await?;

        let decoded = envelope::decode(&body)?;
        envelope::data(decoded).ok_or_else(|| {
            debug!(status = status.as_u16(), "2xx response without Data payload");
            Error::no_data(status.as_u16(), body)
        })
    }

    /// Executes a POST request and returns the full decoded envelope.
    ///
    /// POST responses acknowledge a write rather than return a queryable
    /// resource, so no `Data` unwrap is applied.
    ///
    /// # Errors
    ///
    /// Same classification as [`HttpClient::get`], minus the no-data case.
    #[instrument(name = "dayforce_post", skip(self, body), fields(path = %path))]
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let request = self
            .client
            .post(self.url(path))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(body);

        if self.config.verbose {
            debug!(body = %body, "POST request body");
        }

        let (_status, text) = self.execute(request).await?;
        envelope::decode(&text)
    }

    /// The single failure boundary shared by the GET and POST paths.
    ///
    /// Sends the request, reads the body, and classifies error statuses;
    /// no call site reimplements this translation.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "request send failed");
            Error::network(e)
        })?;

        let status = response.status();
        // Captured before the body is consumed, so domain errors carry the
        // transport-level cause for inspection and chaining.
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "failed to read response body");
            Error::network(e)
        })?;

        let body_preview: String = body.chars().take(200).collect();
        debug!(
            status = status.as_u16(),
            body_length = body.len(),
            body_preview = %body_preview,
            "response received"
        );

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                body_preview = %body_preview,
                "error status from Dayforce API"
            );
            return Err(Error::domain(status.as_u16(), body, status_error));
        }

        Ok((status, body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Returns the session base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the transport configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}
