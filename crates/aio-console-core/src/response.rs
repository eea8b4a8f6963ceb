//! The normalized response envelope returned by every Console operation.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Response of a Console API call.
///
/// The body is exposed twice: parsed as JSON under [`body`](Self::body) (also
/// reachable as [`obj`](Self::obj)) and verbatim under [`text`](Self::text)
/// (also reachable as [`data`](Self::data)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleResponse {
    /// Requested URL
    pub url: String,
    /// Whether the status is 2xx
    pub ok: bool,
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status
    pub status_text: String,
    /// Response headers, lower-cased names
    pub headers: BTreeMap<String, String>,
    /// Body parsed as JSON
    pub body: Value,
    /// Body as received
    pub text: String,
}

impl ConsoleResponse {
    /// Build an envelope from the raw response parts.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        headers: BTreeMap<String, String>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            url: url.into(),
            ok: (200..300).contains(&status),
            status,
            status_text: status_text.into(),
            headers,
            body: parse_body(&text),
            text,
        }
    }

    /// Alias of [`body`](Self::body).
    #[must_use]
    pub fn obj(&self) -> &Value {
        &self.body
    }

    /// Alias of [`text`](Self::text).
    #[must_use]
    pub fn data(&self) -> &str {
        &self.text
    }

    /// Look up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Deserialize the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not match `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(T::deserialize(&self.body)?)
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
