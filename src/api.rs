//! The `SmartFile` entry point.
//!
//! [`SmartFile`] owns the configuration and one shared [`HttpClient`], and
//! hands out the resource handles. Each handle is built on first use and
//! reused afterwards; every handle talks through the same session.
//!
//! # Example
//!
//! ```rust,ignore
//! use smartfile::{SmartFile, SmartFileConfig, ApiKey, ApiPassword};
//!
//! let config = SmartFileConfig::builder()
//!     .api_key(ApiKey::new("my-key")?)
//!     .api_password(ApiPassword::new("my-password")?)
//!     .build()?;
//! let api = SmartFile::new(config)?;
//!
//! let me = api.user().read("bobafett").await?;
//! api.path().remove("/old/report.pdf").await?;
//! ```

use std::sync::{Arc, OnceLock};

use crate::clients::{ApiError, HttpClient};
use crate::config::SmartFileConfig;
use crate::resources::{
    OperationPoller, PathApi, PathDataApi, PathOperApi, PathTreeApi, RoleApi, UserApi,
};

/// Client facade for the SmartFile API.
///
/// `SmartFile` is `Send + Sync` and can be shared across tasks behind an
/// `Arc`.
#[derive(Debug)]
pub struct SmartFile {
    config: SmartFileConfig,
    session: Arc<HttpClient>,
    poller: OperationPoller,
    user: OnceLock<UserApi>,
    role: OnceLock<RoleApi>,
    path: OnceLock<PathApi>,
    path_oper: OnceLock<PathOperApi>,
    path_tree: OnceLock<PathTreeApi>,
    path_data: OnceLock<PathDataApi>,
}

impl SmartFile {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the HTTP client cannot be built.
    pub fn new(config: SmartFileConfig) -> Result<Self, ApiError> {
        let session = Arc::new(HttpClient::new(&config)?);
        let poller = OperationPoller::new(config.poll_checks(), config.poll_interval());
        tracing::debug!("SmartFile client ready for {}", session.api_url());

        Ok(Self {
            config,
            session,
            poller,
            user: OnceLock::new(),
            role: OnceLock::new(),
            path: OnceLock::new(),
            path_oper: OnceLock::new(),
            path_tree: OnceLock::new(),
            path_data: OnceLock::new(),
        })
    }

    /// Creates a client with credentials from `SMARTFILE_API_KEY` and
    /// `SMARTFILE_API_PASS`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if either variable is missing or empty.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(SmartFileConfig::from_env()?)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SmartFileConfig {
        &self.config
    }

    /// Returns the shared session.
    #[must_use]
    pub const fn session(&self) -> &Arc<HttpClient> {
        &self.session
    }

    /// Returns the user handle.
    #[must_use]
    pub fn user(&self) -> &UserApi {
        self.user.get_or_init(|| UserApi::new(Arc::clone(&self.session)))
    }

    /// Returns the role handle.
    #[must_use]
    pub fn role(&self) -> &RoleApi {
        self.role.get_or_init(|| RoleApi::new(Arc::clone(&self.session)))
    }

    /// Returns the composite path handle.
    #[must_use]
    pub fn path(&self) -> &PathApi {
        self.path
            .get_or_init(|| PathApi::new(Arc::clone(&self.session), self.poller))
    }

    /// Returns the path operation handle.
    #[must_use]
    pub fn path_oper(&self) -> &PathOperApi {
        self.path_oper
            .get_or_init(|| PathOperApi::new(Arc::clone(&self.session), self.poller))
    }

    /// Returns the path tree handle.
    #[must_use]
    pub fn path_tree(&self) -> &PathTreeApi {
        self.path_tree
            .get_or_init(|| PathTreeApi::new(Arc::clone(&self.session)))
    }

    /// Returns the path data handle.
    #[must_use]
    pub fn path_data(&self) -> &PathDataApi {
        self.path_data
            .get_or_init(|| PathDataApi::new(Arc::clone(&self.session)))
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SmartFile>();
};
