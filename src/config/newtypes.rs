//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential and URL strings
//! that validate their contents on construction.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated SmartFile API key.
///
/// # Example
///
/// ```rust
/// use smartfile::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated SmartFile API password.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiPassword(*****)`.
///
/// ```rust
/// use smartfile::ApiPassword;
///
/// let password = ApiPassword::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "ApiPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiPassword(String);

impl ApiPassword {
    /// Creates a new validated API password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyApiPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for ApiPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(*****)")
    }
}

/// A validated service root URL, e.g. `https://app.smartfile.com/`.
///
/// Only `http` and `https` schemes are accepted and a host must be present.
/// The versioned API prefix is appended by [`BaseUrl::versioned`].
///
/// # Example
///
/// ```rust
/// use smartfile::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8000").unwrap();
/// assert_eq!(url.versioned("2"), "http://localhost:8000/api/2/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not
    /// `http`/`https` or the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        if rest[..host_end].is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Returns the versioned API root, always ending in `/`.
    #[must_use]
    pub fn versioned(&self, version: &str) -> String {
        let root = self.0.trim_end_matches('/');
        let version = version.trim_matches('/');
        format!("{root}/api/{version}/")
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
