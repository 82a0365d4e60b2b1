//! Error types for SmartFile API calls.
//!
//! Every network operation returns [`ApiError`]. Its variants keep the
//! failure kinds apart so callers can react to each one:
//!
//! - [`TemplatingError`]: a resource URL could not be built from its arguments
//! - [`RequestError`]: the transport failed before any response arrived
//! - [`ResponseError`]: the service answered with a non-success status
//!
//! # Example
//!
//! ```rust,ignore
//! use smartfile::ApiError;
//!
//! match api.user().read("bobafett").await {
//!     Ok(response) => println!("User: {}", response.body),
//!     Err(ApiError::Response(e)) => println!("API error {}: {}", e.status, e.detail),
//!     Err(ApiError::Request(e)) => println!("Network error: {}", e.detail()),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Detail used when a failed response carries no usable `detail` field.
pub const DEFAULT_ERROR_DETAIL: &str = "Server error; check response for errors";

/// A URL template received fewer arguments than it has placeholders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Template '{template}' needs {expected} argument(s) but {supplied} were supplied")]
pub struct TemplatingError {
    /// The template in `{}` placeholder notation.
    pub template: String,
    /// Number of placeholders in the template.
    pub expected: usize,
    /// Number of arguments the caller supplied.
    pub supplied: usize,
}

/// The transport failed before a response was received.
///
/// Wraps the underlying `reqwest` error (DNS, connect, timeout, ...).
#[derive(Debug, Error)]
#[error("{detail}")]
pub struct RequestError {
    detail: String,
    #[source]
    source: reqwest::Error,
}

impl RequestError {
    /// Returns the string form of the underlying transport error.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the underlying transport error.
    #[must_use]
    pub const fn inner(&self) -> &reqwest::Error {
        &self.source
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(source: reqwest::Error) -> Self {
        Self {
            detail: source.to_string(),
            source,
        }
    }
}

/// The service answered with a non-success status.
///
/// `detail` is taken from the body's `detail` field when the body is a JSON
/// object that has one, and is [`DEFAULT_ERROR_DETAIL`] otherwise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Response {status}: {detail}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Human-readable detail extracted from the body.
    pub detail: String,
}

impl ResponseError {
    /// Builds a `ResponseError` from a status and the raw response body.
    ///
    /// Never fails: an empty or non-JSON body yields the default detail.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json.get("detail").cloned())
            .map_or_else(
                || DEFAULT_ERROR_DETAIL.to_string(),
                |detail| match detail {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                },
            );

        Self { status, detail }
    }
}

/// Unified error type for SmartFile API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A resource URL could not be built.
    #[error(transparent)]
    Templating(#[from] TemplatingError),

    /// The transport failed before a response arrived.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A non-success response was received.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The resource family does not support the requested operation.
    #[error("The {resource} resource does not support {operation}")]
    Unsupported {
        /// The resource family name (e.g., "user").
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A successful response lacked a field a follow-up call depends on.
    #[error("Response from {url} has no usable '{field}' field")]
    MissingField {
        /// The URL that was read.
        url: String,
        /// The field that was expected.
        field: &'static str,
    },

    /// Reading or writing a local file failed.
    #[error("Local file error: {0}")]
    Io(#[from] std::io::Error),

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(RequestError::from(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_uses_detail_field() {
        let error = ResponseError::from_body(404, br#"{"detail": "Not found."}"#);
        assert_eq!(error.status, 404);
        assert_eq!(error.detail, "Not found.");
        assert_eq!(error.to_string(), "Response 404: Not found.");
    }

    #[test]
    fn test_response_error_falls_back_on_empty_body() {
        let error = ResponseError::from_body(500, b"");
        assert_eq!(error.detail, DEFAULT_ERROR_DETAIL);
    }

    #[test]
    fn test_response_error_falls_back_on_non_json_body() {
        let error = ResponseError::from_body(503, b"<html>Service Unavailable</html>");
        assert_eq!(error.status, 503);
        assert_eq!(error.detail, DEFAULT_ERROR_DETAIL);
    }

    #[test]
    fn test_response_error_falls_back_without_detail_field() {
        let error = ResponseError::from_body(400, br#"{"name": ["This field is required."]}"#);
        assert_eq!(error.detail, DEFAULT_ERROR_DETAIL);

        let error = ResponseError::from_body(400, b"[]");
        assert_eq!(error.detail, DEFAULT_ERROR_DETAIL);
    }

    #[test]
    fn test_response_error_renders_structured_detail() {
        let error = ResponseError::from_body(400, br#"{"detail": {"path": "missing"}}"#);
        assert_eq!(error.detail, r#"{"path":"missing"}"#);
    }

    #[test]
    fn test_templating_error_message() {
        let error = TemplatingError {
            template: "user/{}/".to_string(),
            expected: 1,
            supplied: 0,
        };
        assert_eq!(
            error.to_string(),
            "Template 'user/{}/' needs 1 argument(s) but 0 were supplied"
        );
    }

    #[test]
    fn test_api_error_wraps_variants_transparently() {
        let error: ApiError = ResponseError::from_body(403, br#"{"detail": "Forbidden"}"#).into();
        assert_eq!(error.to_string(), "Response 403: Forbidden");

        let error: ApiError = ConfigError::EmptyApiKey.into();
        assert!(matches!(error, ApiError::Config(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_unsupported_and_missing_field_messages() {
        let error = ApiError::Unsupported {
            resource: "path/tree",
            operation: "delete",
        };
        assert_eq!(
            error.to_string(),
            "The path/tree resource does not support delete"
        );

        let error = ApiError::MissingField {
            url: "http://host/api/2/path/tree/a/".to_string(),
            field: "id",
        };
        assert_eq!(
            error.to_string(),
            "Response from http://host/api/2/path/tree/a/ has no usable 'id' field"
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &ResponseError {
            status: 400,
            detail: "test".to_string(),
        };
        let _ = response_error;

        let templating_error: &dyn std::error::Error = &TemplatingError {
            template: "t".to_string(),
            expected: 1,
            supplied: 0,
        };
        let _ = templating_error;
    }
}
