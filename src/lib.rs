//! # SmartFile API Rust Client
//!
//! An async Rust client for the SmartFile file-storage REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SmartFileConfig`] and [`SmartFileConfigBuilder`]
//! - Validated newtypes for API credentials and the service URL
//! - Credential lookup from `SMARTFILE_API_KEY` / `SMARTFILE_API_PASS`
//! - URL templates for every resource family, resolved from positional
//!   arguments ([`rest::PathTemplate`])
//! - Uniform response handling: every call yields a decoded response or a
//!   typed [`ApiError`]
//! - File upload and streamed download through [`resources::PathApi`]
//! - Remove, move and copy operations that wait for completion through a
//!   bounded poll loop ([`resources::OperationPoller`])
//!
//! ## Quick Start
//!
//! ```rust
//! use smartfile::{ApiKey, ApiPassword, BaseUrl, SmartFileConfig};
//!
//! let config = SmartFileConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_password(ApiPassword::new("your-api-password").unwrap())
//!     .base_url(BaseUrl::new("https://app.smartfile.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://app.smartfile.com/api/2/");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use smartfile::SmartFile;
//!
//! // Credentials from SMARTFILE_API_KEY and SMARTFILE_API_PASS
//! let api = SmartFile::from_env()?;
//!
//! // Metadata
//! let folder = api.path().read("/documents", true).await?;
//! println!("{}", folder.body);
//!
//! // Files
//! api.path().upload("/documents/report.pdf", "report.pdf").await?;
//! api.path().download("report-copy.pdf", "/documents/report.pdf").await?;
//!
//! // Long-running operations
//! let status = api.path().remove("/documents/report.pdf").await?;
//! ```
//!
//! ## Errors
//!
//! Configuration problems are reported as [`ConfigError`]. Every network
//! operation returns [`ApiError`], which separates URL templating failures,
//! transport failures and non-success responses.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests and poll attempts at debug
//! level, exhausted polls at warn level, finished transfers at info level).
//! Install a subscriber in your application to see them.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::SmartFile;
pub use config::{ApiKey, ApiPassword, BaseUrl, SmartFileConfig, SmartFileConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, DataResponse, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, RequestBody, RequestError, ResponseError, TemplatingError,
};

// Re-export resource types
pub use resources::{
    OperationHandle, OperationPoller, OperationStatus, PathApi, PathDataApi, PathOperApi,
    PathTreeApi, RoleApi, UserApi,
};
