//! HTTP response types for the SmartFile client.
//!
//! Metadata calls produce an [`HttpResponse`] whose body is decoded JSON.
//! Content-transfer calls produce a [`DataResponse`] whose body is left on
//! the wire and consumed as a byte stream.

use std::collections::HashMap;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::clients::errors::{ApiError, RequestError};

/// Size of the pieces a [`DataResponse`] is written out in (16 KiB).
pub const DOWNLOAD_CHUNK_SIZE: usize = 16 * 1024;

/// A decoded response from the SmartFile API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body.
    ///
    /// `null` for an empty body, a JSON string holding the raw text if the
    /// body is not JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a response from its status, headers and raw body bytes.
    #[must_use]
    pub fn from_parts(code: u16, headers: HashMap<String, Vec<String>>, raw: &[u8]) -> Self {
        let body = if raw.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(raw).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(raw).into_owned())
            })
        };

        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns a top-level string field of the body, if present.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(serde_json::Value::as_str)
    }

    /// Returns a top-level field of the body rendered as a path argument.
    ///
    /// Strings are returned as-is, numbers in their decimal form.
    #[must_use]
    pub fn id_field(&self, key: &str) -> Option<String> {
        match self.body.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A successful content-transfer response whose body has not been read.
///
/// Consume it with [`DataResponse::write_to`] to stream it to disk, or with
/// [`DataResponse::bytes`] for small payloads.
#[derive(Debug)]
pub struct DataResponse {
    inner: reqwest::Response,
}

impl DataResponse {
    pub(crate) const fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns the advertised body length, if known.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Reads the whole body into memory.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the transfer is interrupted.
    pub async fn bytes(self) -> Result<Vec<u8>, ApiError> {
        let bytes = self.inner.bytes().await.map_err(RequestError::from)?;
        Ok(bytes.to_vec())
    }

    /// Streams the body into `writer` in pieces of at most
    /// [`DOWNLOAD_CHUNK_SIZE`] bytes and returns the number of bytes written.
    ///
    /// Memory use is bounded by the transport's chunk size, not the body size.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the transfer is interrupted and
    /// [`ApiError::Io`] if writing fails. Bytes already written stay written.
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<u64, ApiError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written: u64 = 0;
        while let Some(chunk) = self.inner.chunk().await.map_err(RequestError::from)? {
            for piece in chunk.chunks(DOWNLOAD_CHUNK_SIZE) {
                writer.write_all(piece).await?;
                written += piece.len() as u64;
            }
        }
        writer.flush().await?;
        Ok(written)
    }
}
