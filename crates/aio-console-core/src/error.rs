//! Error types for Console operations.
//!
//! Failures are reported as they come from the HTTP layer or the remote
//! service. Operation-level failures carry a stable code such as
//! `ERROR_GET_PROJECTS` wrapping the underlying cause.

use thiserror::Error;

/// Main error type for Console operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The client could not be initialized
    #[error("SDK initialization error(s), missing or invalid: {0}")]
    Initialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint or host
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid request, e.g. a missing path parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Local validation of a request model failed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The service could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service answered with a non-2xx status
    #[error("{status} - {status_text} ({body})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Response body text
        body: String,
    },

    /// A response body could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Reading an upload from disk failed
    #[error("File error: {0}")]
    FileError(String),

    /// A named Console operation failed
    #[error("[CoreConsoleAPISDK:{code}] {source}")]
    Operation {
        /// Operation error code
        code: &'static str,
        /// The underlying failure
        source: Box<Error>,
    },
}

/// Specialized result type for Console operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an error with the code of the operation that produced it.
    #[must_use]
    pub fn for_operation(code: &'static str, source: Self) -> Self {
        Self::Operation {
            code,
            source: Box::new(source),
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Initialization(_) => "ERROR_SDK_INITIALIZATION",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Api { .. } => "API_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::FileError(_) => "FILE_ERROR",
            Self::Operation { code, .. } => code,
        }
    }

    /// HTTP status returned by the service, looking through operation wrappers.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Operation { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The innermost cause, skipping operation wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Operation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::FileError(err.to_string())
    }
}
