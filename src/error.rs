//! Error types for SmartFile client configuration.
//!
//! This module contains the errors raised while building a
//! [`SmartFileConfig`](crate::SmartFileConfig), before any network call is
//! made. Errors raised by API calls live in [`crate::clients::ApiError`].
//!
//! # Example
//!
//! ```rust
//! use smartfile::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant carries an actionable message. Credential errors are
/// reported before a session is created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid SmartFile API key.")]
    EmptyApiKey,

    /// API password cannot be empty.
    #[error("API password cannot be empty. Please provide a valid SmartFile API password.")]
    EmptyApiPassword,

    /// The base URL is not an absolute HTTP(S) URL.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://app.smartfile.com/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Credentials were neither given explicitly nor found in the environment.
    #[error("Set key/password ({key_var}, {password_var}) in environment")]
    MissingCredentials {
        /// Environment variable holding the API key.
        key_var: &'static str,
        /// Environment variable holding the API password.
        password_var: &'static str,
    },
}
