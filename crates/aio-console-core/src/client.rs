//! HTTP client configuration and request execution.
//!
//! [`ConsoleHttpClient`] renders an [`Endpoint`] with its [`RequestOptions`],
//! runs the request interceptor, sends the request and normalizes the
//! response. Each call is a single attempt.

use crate::endpoint::Endpoint;
use crate::interceptor::{normalize_response, AuthContext, RequestInterceptor};
use crate::request::{PreparedRequest, RequestBody, RequestOptions};
use crate::response::ConsoleResponse;
use crate::{Error, Result};
use reqwest::{Client, ClientBuilder};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default `User-Agent` header.
pub const USER_AGENT: &str = concat!("aio-console/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connect timeout
    pub connect_timeout: Duration,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Accept gzip-compressed responses
    pub enable_compression: bool,
}

impl HttpConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    fn build_client(&self) -> Result<Client> {
        ClientBuilder::new()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .gzip(self.enable_compression)
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes Console requests against one API host.
#[derive(Clone)]
pub struct ConsoleHttpClient {
    http: Client,
    api_host: Url,
    interceptor: RequestInterceptor,
}

impl fmt::Debug for ConsoleHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHttpClient")
            .field("api_host", &self.api_host.as_str())
            .field("auth", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ConsoleHttpClient {
    /// Create a client for `api_host` authenticating with `auth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_host: Url, auth: Arc<dyn AuthContext>, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_client()?,
            api_host,
            interceptor: RequestInterceptor::new(auth),
        })
    }

    /// Return the API host.
    #[must_use]
    pub fn api_host(&self) -> &Url {
        &self.api_host
    }

    /// Render and intercept a request without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if a path parameter is missing or a header value is
    /// invalid.
    pub fn prepare(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<PreparedRequest> {
        let request = options.prepare(endpoint, &self.api_host)?;
        self.interceptor.intercept(request)
    }

    /// Send a request and return the normalized response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-2xx statuses and a transport error when
    /// no response was received.
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        options: RequestOptions,
    ) -> Result<ConsoleResponse> {
        let request = self.prepare(endpoint, options)?;
        info!(method = %request.method, path = request.url.path(), "Sending Console request");

        let response = self.send(request).await?;
        if response.ok {
            Ok(response)
        } else {
            Err(Error::Api {
                status: response.status,
                status_text: response.status_text,
                body: response.text,
            })
        }
    }

    async fn send(&self, request: PreparedRequest) -> Result<ConsoleResponse> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.http.request(method, url).headers(headers);
        builder = match body {
            Some(RequestBody::Json(payload)) => builder.json(&payload),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.into_form()?),
            None => builder,
        };

        let response = builder.send().await?;
        let url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        Ok(normalize_response(&url, status, &headers, text))
    }
}
