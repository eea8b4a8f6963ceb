//! Request and response interception.
//!
//! The request interceptor injects the bearer token and API key into every
//! outgoing request; the response side turns the HTTP response into a
//! [`ConsoleResponse`].

use crate::request::{PreparedRequest, RequestBody, API_KEY_HEADER};
use crate::response::ConsoleResponse;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Source of the credentials attached to each request.
#[cfg_attr(test, mockall::automock)]
pub trait AuthContext: Send + Sync {
    /// Access token sent as a bearer token.
    fn access_token(&self) -> SecretString;

    /// API key sent in the `x-api-key` header.
    fn api_key(&self) -> String;
}

/// Static access token and API key.
#[derive(Clone)]
pub struct Credentials {
    access_token: SecretString,
    api_key: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] naming every missing value.
    pub fn new(access_token: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        let api_key = api_key.into();

        let missing: Vec<&str> = [
            ("accessToken", access_token.trim().is_empty()),
            ("apiKey", api_key.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(Error::Initialization(missing.join(", ")));
        }

        Ok(Self {
            access_token: SecretString::from(access_token),
            api_key,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl AuthContext for Credentials {
    fn access_token(&self) -> SecretString {
        self.access_token.clone()
    }

    fn api_key(&self) -> String {
        self.api_key.clone()
    }
}

/// Injects auth headers into prepared requests.
#[derive(Clone)]
pub struct RequestInterceptor {
    auth: Arc<dyn AuthContext>,
}

impl RequestInterceptor {
    /// Create an interceptor reading credentials from `auth` on every request.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthContext>) -> Self {
        Self { auth }
    }

    /// Add `Authorization`, `x-api-key` and a default JSON content type.
    ///
    /// An `x-api-key` already present on the request is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is not a valid header value.
    pub fn intercept(&self, mut request: PreparedRequest) -> Result<PreparedRequest> {
        let token = self.auth.access_token();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| {
                Error::InvalidRequest("Access token is not a valid header value".to_string())
            })?;
        bearer.set_sensitive(true);
        request.headers.insert(AUTHORIZATION, bearer);

        let api_key_header = HeaderName::from_static(API_KEY_HEADER);
        if !request.headers.contains_key(&api_key_header) {
            let value = HeaderValue::from_str(&self.auth.api_key()).map_err(|_| {
                Error::InvalidRequest("API key is not a valid header value".to_string())
            })?;
            request.headers.insert(api_key_header, value);
        }

        if matches!(request.body, Some(RequestBody::Json(_)))
            && !request.headers.contains_key(CONTENT_TYPE)
        {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        debug!(method = %request.method, url = %request.url, "Console request");
        Ok(request)
    }
}

/// Build the response envelope from the HTTP response parts.
#[must_use]
pub fn normalize_response(
    url: &Url,
    status: StatusCode,
    headers: &HeaderMap,
    text: String,
) -> ConsoleResponse {
    let mut flattened: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        flattened
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    let response = ConsoleResponse::new(
        url.as_str(),
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        flattened,
        text,
    );
    debug!(url = %response.url, status = response.status, ok = response.ok, "Console response");
    response
}
