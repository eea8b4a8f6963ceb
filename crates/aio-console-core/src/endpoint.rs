//! Endpoint path templates.
//!
//! An [`Endpoint`] pairs an HTTP method with a path template such as
//! `/console/organizations/{orgId}/projects`. Rendering fills each `{name}`
//! segment from the request parameters; parameters the template does not
//! consume become query parameters.

use crate::query::QueryParams;
use crate::{Error, Result};
use reqwest::Method;
use std::collections::BTreeMap;
use url::Url;

/// A REST endpoint of the Console API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method
    pub method: Method,
    /// Path template, relative to the API host
    pub path: &'static str,
}

impl Endpoint {
    /// Declare an endpoint.
    #[must_use]
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }

    fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.trim_start_matches('/').split('/').filter(|s| !s.is_empty())
    }

    /// Names of the `{name}` placeholders in the path template.
    pub fn path_parameters(&self) -> impl Iterator<Item = &'static str> {
        self.segments().filter_map(placeholder)
    }

    /// Whether `name` is filled from the path template.
    #[must_use]
    pub fn is_path_parameter(&self, name: &str) -> bool {
        self.path_parameters().any(|param| param == name)
    }

    /// Render the endpoint against `host`.
    ///
    /// Path values are percent-encoded as single segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when a path parameter is missing or
    /// empty and [`Error::InvalidEndpoint`] when `host` cannot carry a path.
    pub fn render(&self, host: &Url, parameters: &BTreeMap<String, String>) -> Result<Url> {
        let mut url = host.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::InvalidEndpoint(format!("API host `{host}` cannot be a base URL"))
            })?;
            segments.pop_if_empty();

            for segment in self.segments() {
                match placeholder(segment) {
                    Some(name) => {
                        let value = parameters
                            .get(name)
                            .filter(|value| !value.is_empty())
                            .ok_or_else(|| {
                                Error::InvalidRequest(format!(
                                    "Required parameter `{name}` is not provided for {} {}",
                                    self.method, self.path
                                ))
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let query = self.query_parameters(parameters);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        Ok(url)
    }

    /// Parameters not consumed by the path template, in name order.
    #[must_use]
    pub fn query_parameters(&self, parameters: &BTreeMap<String, String>) -> QueryParams {
        let mut query = QueryParams::new();
        for (name, value) in parameters {
            if !self.is_path_parameter(name) {
                query.push(name.as_str(), value);
            }
        }
        query
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
