//! Transport configuration types.

/// Outbound proxy settings, handed to the HTTP transport when the session
/// is built. Dayforce deployments behind corporate egress proxies set this
/// through [`HttpConfig`](crate::http_client::HttpConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Address of the proxy, scheme included (`http://gateway.corp:3128`).
    pub url: String,
    /// Username when the proxy requires authentication.
    pub username: Option<String>,
    /// Password when the proxy requires authentication.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Creates an unauthenticated proxy configuration.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Adds proxy credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}
