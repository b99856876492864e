//! Image input handling for plant diagnosis
//!
//! Loads photos from disk or data URLs and encodes them as the bare base64
//! payload plus MIME type that Gemini expects for inline image parts.

pub mod mime;

pub use mime::{detect_image_mime, mime_from_extension, resolve_image_mime, DEFAULT_IMAGE_MIME};

use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    bytes: Vec<u8>,
    mime_type: Option<String>,
}

impl ImageInput {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read an image file, taking the declared MIME type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        tracing::debug!("Read image {} ({} bytes)", path.display(), bytes.len());

        Ok(Self {
            bytes,
            mime_type: mime_from_extension(path).map(str::to_string),
        })
    }

    /// Decode a `data:<mime>;base64,<payload>` URL or a bare base64 string.
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let (mime_type, payload) = split_data_url(data_url);
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::Encoding(format!("Invalid base64 image data: {}", e)))?;

        Ok(Self {
            bytes,
            mime_type: mime_type.map(str::to_string),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn declared_mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn mime_type(&self) -> String {
        resolve_image_mime(self.mime_type.as_deref(), &self.bytes)
    }

    /// Base64 payload with no data URL prefix.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Split a data URL into its MIME type and payload. Input without a
/// `data:` prefix is returned unchanged as the payload.
pub fn split_data_url(input: &str) -> (Option<&str>, &str) {
    let Some(rest) = input.strip_prefix("data:") else {
        return (None, input);
    };
    let Some((header, payload)) = rest.split_once(',') else {
        return (None, input);
    };

    let mime = header
        .split(';')
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    (mime, payload)
}
