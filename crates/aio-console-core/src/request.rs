//! Request options assembly.
//!
//! Every Console call is described by a flat set of named parameters (path
//! and query values alike), the API key header and an optional body. The
//! assembled options are turned into a [`PreparedRequest`] once the target
//! [`Endpoint`] and API host are known.

use crate::endpoint::Endpoint;
use crate::upload::MultipartForm;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Body of a Console request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON document
    Json(serde_json::Value),
    /// `multipart/form-data` upload
    Multipart(MultipartForm),
}

/// Parameters and body for a single Console call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    api_key: String,
    parameters: BTreeMap<String, String>,
    body: Option<RequestBody>,
}

impl RequestOptions {
    /// Start options for a call authenticated with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            parameters: BTreeMap::new(),
            body: None,
        }
    }

    /// Set a named parameter, replacing any previous value.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.insert(name.into(), value.to_string());
        self
    }

    /// Merge a set of named parameters.
    #[must_use]
    pub fn with_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.parameters.extend(
            parameters
                .into_iter()
                .map(|(name, value)| (name.into(), value.to_string())),
        );
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn with_json_body<B>(mut self, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Attach a multipart body.
    #[must_use]
    pub fn with_multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// The API key sent with the request.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The named parameters.
    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// A single named parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// The request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Render against an endpoint and host.
    ///
    /// # Errors
    ///
    /// Returns an error if a path parameter is missing or the API key is not
    /// a valid header value.
    pub fn prepare(self, endpoint: &Endpoint, host: &Url) -> Result<PreparedRequest> {
        let url = endpoint.render(host, &self.parameters)?;

        let mut headers = HeaderMap::new();
        if !self.api_key.is_empty() {
            let value = HeaderValue::from_str(&self.api_key).map_err(|err| {
                Error::InvalidRequest(format!("Invalid API key header value: {err}"))
            })?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        Ok(PreparedRequest {
            method: endpoint.method.clone(),
            url,
            headers,
            body: self.body,
        })
    }
}

/// Build request options from an API key, parameters and an optional body.
#[must_use]
pub fn create_request_options<I, K, V>(
    api_key: &str,
    parameters: I,
    body: Option<RequestBody>,
) -> RequestOptions
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    let mut options = RequestOptions::new(api_key).with_parameters(parameters);
    options.body = body;
    options
}

/// A fully rendered request, ready for interception and sending.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL including the query string
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<RequestBody>,
}
