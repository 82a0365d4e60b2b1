//! HTTP request types for the SmartFile client.
//!
//! This module provides the [`HttpRequest`] type and its builder. Requests
//! carry an already-resolved absolute URL; URL templating happens in
//! [`crate::rest`].

use std::fmt;

use reqwest::multipart::Form;

/// HTTP methods used by the SmartFile API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieve a resource.
    Get,
    /// Create a resource or submit an operation.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Body of a write request.
///
/// `Empty` sends no body at all, which the service treats differently from
/// an empty form: an update with `Empty` is a no-op, not a field reset.
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` fields.
    Form(Vec<(String, String)>),
    /// `multipart/form-data`, used for file uploads.
    Multipart(Form),
}

impl RequestBody {
    /// Builds a form body from `(name, value)` pairs.
    #[must_use]
    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns `true` if no body will be sent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Form> for RequestBody {
    fn from(form: Form) -> Self {
        Self::Multipart(form)
    }
}

/// An HTTP request to be sent through the shared session.
///
/// # Example
///
/// ```rust
/// use smartfile::clients::{HttpMethod, HttpRequest, RequestBody};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "http://localhost/api/2/user/")
///     .body(RequestBody::form([("username", "bobafett")]))
///     .build();
///
/// assert_eq!(request.http_method, HttpMethod::Post);
/// assert!(!request.body.is_empty());
/// ```
#[derive(Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The request body.
    pub body: RequestBody,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: RequestBody,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: RequestBody::Empty,
            query: Vec::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds several query parameters.
    #[must_use]
    pub fn query(mut self, params: &[(&str, &str)]) -> Self {
        self.query
            .extend(params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_bodyless_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://host/api/2/user/").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "http://host/api/2/user/");
        assert!(request.body.is_empty());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_builder_collects_query_params_in_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://host/api/2/path/tree/")
            .query(&[("children", "true")])
            .query_param("limit", "10")
            .build();

        assert_eq!(
            request.query,
            vec![
                ("children".to_string(), "true".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_body_converts_pairs() {
        let body = RequestBody::form([("path", "/docs/old.txt")]);
        match body {
            RequestBody::Form(fields) => {
                assert_eq!(fields, vec![("path".to_string(), "/docs/old.txt".to_string())]);
            }
            other => panic!("expected form body, got {other:?}"),
        }
    }

    #[test]
    fn test_default_body_is_empty() {
        assert!(RequestBody::default().is_empty());
    }
}
