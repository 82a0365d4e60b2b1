//! Configuration types for the SmartFile client.
//!
//! # Overview
//!
//! - [`SmartFileConfig`]: credentials, service location and polling settings
//! - [`SmartFileConfigBuilder`]: a builder for [`SmartFileConfig`]
//! - [`ApiKey`], [`ApiPassword`], [`BaseUrl`]: validated newtypes
//!
//! # Credential resolution
//!
//! Credentials given to the builder always win. When neither the key nor
//! the password is set, [`SmartFileConfigBuilder::build`] reads
//! `SMARTFILE_API_KEY` and `SMARTFILE_API_PASS` from the process
//! environment, and fails with [`ConfigError::MissingCredentials`] if either
//! is absent. No network call is made while building.
//!
//! # Example
//!
//! ```rust
//! use smartfile::{SmartFileConfig, ApiKey, ApiPassword, BaseUrl};
//!
//! let config = SmartFileConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_password(ApiPassword::new("my-password").unwrap())
//!     .base_url(BaseUrl::new("http://localhost:8000/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "http://localhost:8000/api/2/");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiPassword, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "SMARTFILE_API_KEY";

/// Environment variable holding the API password.
pub const API_PASS_VAR: &str = "SMARTFILE_API_PASS";

/// Environment variable that overrides the service URL.
pub const API_URL_VAR: &str = "SMARTFILE_API_URL";

/// Service URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://app.smartfile.com/";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2";

/// Default number of status checks made for a long-running operation.
pub const DEFAULT_POLL_CHECKS: u32 = 5;

/// Default wait between two status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Configuration for the SmartFile client.
///
/// `SmartFileConfig` is `Clone`, `Send`, and `Sync`. It is consumed once by
/// [`SmartFile::new`](crate::SmartFile::new) to build the shared session.
#[derive(Clone, Debug)]
pub struct SmartFileConfig {
    api_key: ApiKey,
    api_password: ApiPassword,
    base_url: BaseUrl,
    api_version: String,
    user_agent_prefix: Option<String>,
    poll_checks: u32,
    poll_interval: Duration,
}

impl SmartFileConfig {
    /// Creates a new builder for constructing a `SmartFileConfig`.
    #[must_use]
    pub fn builder() -> SmartFileConfigBuilder {
        SmartFileConfigBuilder::new()
    }

    /// Builds a configuration entirely from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either credential
    /// variable is unset, or [`ConfigError::InvalidBaseUrl`] if
    /// `SMARTFILE_API_URL` holds an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        SmartFileConfigBuilder::new().build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API password.
    #[must_use]
    pub const fn api_password(&self) -> &ApiPassword {
        &self.api_password
    }

    /// Returns the service root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the versioned API root every resource is addressed from.
    #[must_use]
    pub fn api_url(&self) -> String {
        self.base_url.versioned(&self.api_version)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of status checks made for a long-running operation.
    #[must_use]
    pub const fn poll_checks(&self) -> u32 {
        self.poll_checks
    }

    /// Returns the wait between two status checks.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

// Verify SmartFileConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SmartFileConfig>();
};

/// Builder for constructing [`SmartFileConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `SMARTFILE_API_URL` if set, otherwise `https://app.smartfile.com/`
/// - `api_version`: `"2"`
/// - `poll_checks`: 5
/// - `poll_interval`: 2 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SmartFileConfigBuilder {
    api_key: Option<ApiKey>,
    api_password: Option<ApiPassword>,
    base_url: Option<BaseUrl>,
    api_version: Option<String>,
    user_agent_prefix: Option<String>,
    poll_checks: Option<u32>,
    poll_interval: Option<Duration>,
}

impl SmartFileConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API password.
    #[must_use]
    pub fn api_password(mut self, password: ApiPassword) -> Self {
        self.api_password = Some(password);
        self
    }

    /// Sets the service root URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version (the `2` in `/api/2/`).
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many status checks are made for a long-running operation.
    #[must_use]
    pub const fn poll_checks(mut self, checks: u32) -> Self {
        self.poll_checks = Some(checks);
        self
    }

    /// Sets the wait between two status checks.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Builds the [`SmartFileConfig`], resolving credentials.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingCredentials`] if no credential was given and
    ///   the environment does not hold both of them
    /// - [`ConfigError::MissingRequiredField`] if only one of the two
    ///   credentials was given
    /// - [`ConfigError::InvalidBaseUrl`] if `SMARTFILE_API_URL` is invalid
    pub fn build(self) -> Result<SmartFileConfig, ConfigError> {
        let (api_key, api_password) = match (self.api_key, self.api_password) {
            (Some(key), Some(password)) => (key, password),
            (None, None) => credentials_from_env()?,
            (Some(_), None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "api_password",
                })
            }
            (None, Some(_)) => return Err(ConfigError::MissingRequiredField { field: "api_key" }),
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => match std::env::var(API_URL_VAR) {
                Ok(url) if !url.is_empty() => BaseUrl::new(url)?,
                _ => BaseUrl::new(DEFAULT_BASE_URL)?,
            },
        };

        Ok(SmartFileConfig {
            api_key,
            api_password,
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            user_agent_prefix: self.user_agent_prefix,
            poll_checks: self.poll_checks.unwrap_or(DEFAULT_POLL_CHECKS),
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

fn credentials_from_env() -> Result<(ApiKey, ApiPassword), ConfigError> {
    let missing = || ConfigError::MissingCredentials {
        key_var: API_KEY_VAR,
        password_var: API_PASS_VAR,
    };

    let key = std::env::var(API_KEY_VAR).map_err(|_| missing())?;
    let password = std::env::var(API_PASS_VAR).map_err(|_| missing())?;

    let key = ApiKey::new(key).map_err(|_| missing())?;
    let password = ApiPassword::new(password).map_err(|_| missing())?;
    Ok((key, password))
}
