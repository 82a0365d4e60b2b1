//! The shared, authenticated HTTP session.
//!
//! [`HttpClient`] owns the one `reqwest` connection pool and the credentials
//! used by every resource handle. It also normalizes responses: each call
//! either yields a success value or one of the typed errors in
//! [`ApiError`](crate::clients::ApiError).

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::clients::errors::{ApiError, RequestError, ResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::{DataResponse, HttpResponse};
use crate::config::{ApiKey, ApiPassword, SmartFileConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared session for the SmartFile API.
///
/// The session handles:
/// - HTTP basic authentication with the API key and password
/// - Default `User-Agent` and `Accept` headers
/// - Connection pooling across every resource handle
/// - Response normalization into decoded values or typed errors
///
/// It is never mutated after construction and is `Send + Sync`; the facade
/// shares one instance behind an `Arc`.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Versioned API root (e.g., `https://app.smartfile.com/api/2/`).
    api_url: String,
    api_key: ApiKey,
    api_password: ApiPassword,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates the session described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the underlying client cannot be
    /// built (e.g., TLS initialization failure).
    pub fn new(config: &SmartFileConfig) -> Result<Self, ApiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}SmartFile Rust Client v{SDK_VERSION}");

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(RequestError::from)?;

        Ok(Self {
            client,
            api_url: config.api_url(),
            api_key: config.api_key().clone(),
            api_password: config.api_password().clone(),
            user_agent,
        })
    }

    /// Returns the versioned API root every resource is resolved against.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Performs the transport call and returns the raw response.
    ///
    /// The status code is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if no response was received.
    pub async fn send(&self, request: HttpRequest) -> Result<reqwest::Response, ApiError> {
        tracing::debug!("{} {}", request.http_method, request.url);

        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        }
        .basic_auth(self.api_key.as_ref(), Some(self.api_password.as_ref()));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        builder.send().await.map_err(|e| RequestError::from(e).into())
    }

    /// Performs a metadata call and decodes its JSON body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Request`] if no response was received
    /// - [`ApiError::Response`] if the status is not 2xx
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = Self::check_status(self.send(request).await?).await?;
        Self::decode(response).await
    }

    /// Performs a content-transfer call and leaves the body un-read.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Request`] if no response was received
    /// - [`ApiError::Response`] if the status is not 2xx
    pub async fn request_data(&self, request: HttpRequest) -> Result<DataResponse, ApiError> {
        let response = Self::check_status(self.send(request).await?).await?;
        Ok(DataResponse::new(response))
    }

    /// Performs a call and decodes its body whatever the status.
    ///
    /// Used where a non-success status is an answer rather than a failure,
    /// such as operation polling.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if no response was received or the
    /// body could not be read.
    pub async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Turns a non-2xx response into a [`ResponseError`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A body that cannot be read is treated like an empty one.
        let body = response.bytes().await.unwrap_or_default();
        Err(ResponseError::from_body(status.as_u16(), &body).into())
    }

    async fn decode(response: reqwest::Response) -> Result<HttpResponse, ApiError> {
        let code = response.status().as_u16();
        let headers = Self::parse_response_headers(response.headers());
        let raw = response.bytes().await.map_err(RequestError::from)?;
        Ok(HttpResponse::from_parts(code, headers, &raw))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiPassword, BaseUrl};

    fn test_config(prefix: Option<&str>) -> SmartFileConfig {
        let mut builder = SmartFileConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_password(ApiPassword::new("test-password").unwrap())
            .base_url(BaseUrl::new("http://localhost:8000").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_uses_versioned_api_url() {
        let client = HttpClient::new(&test_config(None)).unwrap();
        assert_eq!(client.api_url(), "http://localhost:8000/api/2/");
    }

    #[test]
    fn test_debug_output_masks_password() {
        let client = HttpClient::new(&test_config(None)).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-password"));
        assert!(debug.contains("ApiPassword(*****)"));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&test_config(None)).unwrap();
        assert!(client.user_agent().starts_with("SmartFile Rust Client v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&test_config(Some("Backup/1.0"))).unwrap();
        assert!(client.user_agent().starts_with("Backup/1.0 | "));
        assert!(client.user_agent().contains("SmartFile Rust Client"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
