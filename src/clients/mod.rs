//! HTTP session and response normalization for the SmartFile API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the shared, authenticated session
//! - [`HttpRequest`]: a request with an absolute URL, query and body
//! - [`HttpResponse`]: a decoded metadata response
//! - [`DataResponse`]: an un-read content-transfer response
//! - [`ApiError`]: the error returned by every network operation
//!
//! # Normalization
//!
//! Every call goes through the same rules:
//!
//! - **No response** (DNS, connect, timeout): [`ApiError::Request`]
//! - **2xx**: decoded JSON ([`HttpClient::request`]) or an un-read byte
//!   stream ([`HttpClient::request_data`])
//! - **Anything else**: [`ApiError::Response`] with the status and the
//!   body's `detail` field, or a default message if there is none
//!
//! Nothing is retried here.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, RequestError, ResponseError, TemplatingError, DEFAULT_ERROR_DETAIL};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::{DataResponse, HttpResponse, DOWNLOAD_CHUNK_SIZE};
