//! Asynchronous Console client implementation.
//!
//! The operations themselves live in the resource modules (`projects`,
//! `workspaces`, ...), each adding an `impl ConsoleClient` block.

use crate::operation::ConsoleOperation;
use crate::Result;
use aio_console_core::client::{ConsoleHttpClient, HttpConfig};
use aio_console_core::config::{ConsoleConfig, Environment};
use aio_console_core::interceptor::{AuthContext, Credentials};
use aio_console_core::request::RequestOptions;
use aio_console_core::response::ConsoleResponse;
use aio_console_core::Error;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;
use validator::Validate;

/// Builder for [`ConsoleClient`].
#[derive(Clone)]
pub struct ConsoleClientBuilder {
    access_token: String,
    api_key: String,
    config: ConsoleConfig,
    http_config: Option<HttpConfig>,
}

impl ConsoleClientBuilder {
    /// Create a builder for the given access token and API key.
    #[must_use]
    pub fn new(access_token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_key: api_key.into(),
            config: ConsoleConfig::default(),
            http_config: None,
        }
    }

    /// Select the server environment.
    #[must_use]
    pub fn with_env(mut self, env: Environment) -> Self {
        self.config.env = env;
        self
    }

    /// Override the API host.
    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.config = self.config.with_api_host(host);
        self
    }

    /// Replace the client configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the HTTP client configuration.
    ///
    /// Its timeout takes precedence over the request timeout of the client
    /// configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] when the access token or API key is
    /// missing, or a configuration error for an invalid host.
    pub fn build(self) -> Result<ConsoleClient> {
        let credentials = Arc::new(Credentials::new(self.access_token, self.api_key)?);
        let api_host = self.config.api_host()?;

        let http_config = self
            .http_config
            .unwrap_or_else(|| HttpConfig::new().with_timeout(self.config.timeout()));

        debug!(env = %self.config.env, host = %api_host, "initializing Console client");
        let api_key = credentials.api_key();
        let http = ConsoleHttpClient::new(api_host, credentials, &http_config)?;

        Ok(ConsoleClient {
            http,
            api_key,
            env: self.config.env,
        })
    }
}

impl fmt::Debug for ConsoleClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleClientBuilder")
            .field("access_token", &"[REDACTED]")
            .field("api_key", &self.api_key)
            .field("config", &self.config)
            .field("http_config", &self.http_config)
            .finish()
    }
}

/// Asynchronous client for the Developer Console API.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    http: ConsoleHttpClient,
    api_key: String,
    env: Environment,
}

impl ConsoleClient {
    /// Construct a client for the production environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token or API key is missing.
    pub fn new(access_token: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        ConsoleClientBuilder::new(access_token, api_key).build()
    }

    /// Start a builder.
    #[must_use]
    pub fn builder(
        access_token: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ConsoleClientBuilder {
        ConsoleClientBuilder::new(access_token, api_key)
    }

    /// Return the API host.
    #[must_use]
    pub fn api_host(&self) -> &Url {
        self.http.api_host()
    }

    /// Return the API key sent with every request.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Return the server environment.
    #[must_use]
    pub const fn env(&self) -> Environment {
        self.env
    }

    pub(crate) fn options(&self) -> RequestOptions {
        RequestOptions::new(self.api_key.as_str())
    }

    pub(crate) fn org_options(&self, organization_id: &str) -> RequestOptions {
        self.options().with_parameter("orgId", organization_id)
    }

    pub(crate) fn project_options(&self, organization_id: &str, project_id: &str) -> RequestOptions {
        self.org_options(organization_id)
            .with_parameter("projectId", project_id)
    }

    pub(crate) fn workspace_options(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> RequestOptions {
        self.project_options(organization_id, project_id)
            .with_parameter("workspaceId", workspace_id)
    }

    /// Run an operation, tagging any failure with its code.
    pub(crate) async fn call(
        &self,
        operation: ConsoleOperation,
        options: Result<RequestOptions>,
    ) -> Result<ConsoleResponse> {
        let code = operation.code();
        let options = options.map_err(|err| Error::for_operation(code, err))?;
        self.http
            .execute(&operation.endpoint(), options)
            .await
            .map_err(|err| Error::for_operation(code, err))
    }
}

/// Validate a request model before it is sent.
pub(crate) fn validated<T>(value: &T) -> Result<&T>
where
    T: Validate,
{
    value.validate()?;
    Ok(value)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn build_defaults_to_prod() {
        let client = ConsoleClient::new(TOKEN, API_KEY).unwrap();
        assert_eq!(client.env(), Environment::Prod);
        assert_eq!(client.api_host().as_str(), "https://developers.adobe.io/");
        assert_eq!(client.api_key(), API_KEY);
    }

    #[test]
    fn build_uses_stage_host() {
        let client = ConsoleClient::builder(TOKEN, API_KEY)
            .with_env(Environment::Stage)
            .build()
            .unwrap();
        assert_eq!(client.api_host().as_str(), "https://developers-stage.adobe.io/");
    }

    #[test]
    fn build_rejects_missing_credentials() {
        let err = ConsoleClient::new("", API_KEY).err().unwrap();
        assert_eq!(err, Error::Initialization("accessToken".to_string()));
        assert_eq!(err.error_code(), "ERROR_SDK_INITIALIZATION");
    }

    #[test]
    fn builder_debug_redacts_token() {
        let debug = format!("{:?}", ConsoleClient::builder("secret-token", API_KEY));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn build_rejects_invalid_host() {
        let err = ConsoleClient::builder(TOKEN, API_KEY)
            .with_api_host("::not a host::")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn client_debug_redacts_token() {
        let client = ConsoleClient::new("secret-token", API_KEY).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("developers.adobe.io"));
    }

    #[tokio::test]
    async fn http_config_timeout_is_honored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/organizations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = ConsoleClient::builder(TOKEN, API_KEY)
            .with_api_host(server.uri())
            .with_http_config(HttpConfig::new().with_timeout(Duration::from_millis(300)))
            .build()
            .unwrap();

        let started = Instant::now();
        let err = client.get_organizations().await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(matches!(err.root_cause(), Error::Timeout(_)));
        assert_eq!(err.error_code(), "ERROR_GET_ORGANIZATIONS");
    }

    #[tokio::test]
    async fn config_timeout_applies_without_http_config() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/organizations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(4)),
            )
            .mount(&server)
            .await;

        let config = ConsoleConfig::default()
            .with_api_host(server.uri())
            .with_timeout(1);
        let client = ConsoleClient::builder(TOKEN, API_KEY)
            .with_config(config)
            .build()
            .unwrap();

        let started = Instant::now();
        let err = client.get_organizations().await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(matches!(err.root_cause(), Error::Timeout(_)));
    }

    #[tokio::test]
    async fn call_wraps_failures_with_operation_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/organizations"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("x-api-key", API_KEY))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .call(ConsoleOperation::GetOrganizations, Ok(client.options()))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "ERROR_GET_ORGANIZATIONS");
        assert_eq!(err.status(), Some(500));
        assert!(err
            .to_string()
            .starts_with("[CoreConsoleAPISDK:ERROR_GET_ORGANIZATIONS] 500 - Internal Server Error"));
    }

    #[tokio::test]
    async fn call_wraps_option_errors() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let err = client
            .call(
                ConsoleOperation::GetProject,
                Err(Error::ValidationError("name".to_string())),
            )
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ERROR_GET_PROJECT");
        assert!(matches!(err.root_cause(), Error::ValidationError(_)));
    }
}
