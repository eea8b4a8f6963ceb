//! Configuration structures for Console clients.
//!
//! This module provides the server environments the Console API is deployed
//! to and the configuration used to build a client against one of them.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Environment variable selecting the server environment.
pub const ENV_VAR: &str = "AIO_CLI_ENV";

/// Console API host for the production environment.
pub const PROD_API_HOST: &str = "https://developers.adobe.io";

/// Console API host for the stage environment.
pub const STAGE_API_HOST: &str = "https://developers-stage.adobe.io";

/// Server environment hosting the Console API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production
    #[default]
    Prod,
    /// Stage
    Stage,
}

impl Environment {
    /// All known environments.
    pub const ALL: [Self; 2] = [Self::Prod, Self::Stage];

    /// Environment name as used on the command line and in `AIO_CLI_ENV`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Stage => "stage",
        }
    }

    /// Console API host for this environment.
    #[must_use]
    pub const fn api_host(self) -> &'static str {
        match self {
            Self::Prod => PROD_API_HOST,
            Self::Stage => STAGE_API_HOST,
        }
    }

    /// Read the environment from `AIO_CLI_ENV`, defaulting to prod when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds an unknown environment name.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_value(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// Resolve the environment from the value of `AIO_CLI_ENV`.
    ///
    /// A missing or blank value selects prod.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is an unknown environment name.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, Error> {
        match value {
            Some(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|env| env.name() == normalized)
            .ok_or_else(|| {
                Error::Initialization(format!("env (unknown environment `{s}`, expected prod or stage)"))
            })
    }
}

/// Configuration for a Console client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConsoleConfig {
    /// Server environment
    #[serde(default)]
    pub env: Environment,

    /// Explicit API host, overriding the environment's host
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl ConsoleConfig {
    /// Create a configuration targeting the given environment.
    #[must_use]
    pub const fn new(env: Environment) -> Self {
        Self {
            env,
            api_host: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Override the API host.
    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration and resolve the API host.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the host cannot be parsed.
    pub fn api_host(&self) -> Result<Url, Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        let host = self.api_host.as_deref().unwrap_or(self.env.api_host());
        Url::parse(host).map_err(|e| Error::ConfigError(format!("Invalid API host `{host}`: {e}")))
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}
