//! File uploads and multipart forms.
//!
//! Certificate and icon uploads are sent as `multipart/form-data`. Forms are
//! kept as plain data until send time so interceptors and tests can inspect
//! them.

use crate::{Error, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::debug;

/// In-memory file content destined for a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    content: Vec<u8>,
    mime: Option<String>,
}

impl FileUpload {
    /// Create an upload from raw bytes.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime = guess_mime(&file_name).map(str::to_string);
        Self {
            file_name,
            content: content.into(),
            mime,
        }
    }

    /// Override the MIME type of the part.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read an upload from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading upload from {}", path.display());

        let content = tokio::fs::read(path)
            .await
            .map_err(|err| Error::FileError(format!("Failed to read {}: {err}", path.display())))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());

        Ok(Self::new(file_name, content))
    }

    /// File name sent with the part.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File content.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// MIME type, if known.
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.content).file_name(self.file_name);
        match self.mime {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|err| Error::InvalidRequest(format!("Invalid MIME type `{mime}`: {err}"))),
            None => Ok(part),
        }
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "pem" | "crt" | "cer" => Some("application/x-pem-file"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// A single part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// Plain text field
    Text(String),
    /// File field
    File(FileUpload),
}

/// Ordered multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormPart::Text(value.into())));
        self
    }

    /// Append a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, upload: FileUpload) -> Self {
        self.parts.push((name.into(), FormPart::File(upload)));
        self
    }

    /// Borrow the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    /// Look up a part by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormPart> {
        self.parts
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, part)| part)
    }

    /// Convert into a `reqwest` form.
    ///
    /// # Errors
    ///
    /// Returns an error if a file part carries an invalid MIME type.
    pub fn into_form(self) -> Result<Form> {
        self.parts
            .into_iter()
            .try_fold(Form::new(), |form, (name, part)| match part {
                FormPart::Text(value) => Ok(form.text(name, value)),
                FormPart::File(upload) => Ok(form.part(name, upload.into_part()?)),
            })
    }
}
