//! User resource handle.
//!
//! Users are addressed as `user/{id}/` and support the full set of CRUD
//! operations, plus listing of the `user/` collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use smartfile::clients::RequestBody;
//!
//! let users = api.user();
//! users
//!     .create(RequestBody::form([("username", "bobafett"), ("email", "boba@example.com")]))
//!     .await?;
//! let boba = users.read("bobafett").await?;
//! users.delete("bobafett").await?;
//! ```

use std::sync::Arc;

use crate::clients::{ApiError, HttpClient, HttpResponse, RequestBody};
use crate::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};

/// URL template of the user family.
pub const USER_TEMPLATE: PathTemplate = PathTemplate::new(&[
    Segment::Literal("user/"),
    Segment::Placeholder("id"),
    Segment::Literal("/"),
]);

/// Handle for `user/{id}/`.
#[derive(Debug, Clone)]
pub struct UserApi {
    endpoint: ResourceEndpoint,
}

impl UserApi {
    /// Creates the handle on the shared session.
    #[must_use]
    pub const fn new(session: Arc<HttpClient>) -> Self {
        Self {
            endpoint: ResourceEndpoint::new("user", USER_TEMPLATE, Capabilities::CRUD, session),
        }
    }

    /// Returns the underlying endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Creates a user by posting `fields` to the `user/` collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn create(&self, fields: RequestBody) -> Result<HttpResponse, ApiError> {
        self.endpoint.create(fields, &[""]).await
    }

    /// Reads the user named `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(&self, username: &str) -> Result<HttpResponse, ApiError> {
        self.endpoint.read(&[username], &[]).await
    }

    /// Lists users.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        self.endpoint.list(query).await
    }

    /// Updates the user named `username` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn update(&self, username: &str, fields: RequestBody) -> Result<HttpResponse, ApiError> {
        self.endpoint.update(fields, &[username]).await
    }

    /// Deletes the user named `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn delete(&self, username: &str) -> Result<HttpResponse, ApiError> {
        self.endpoint.delete(&[username]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiPassword, BaseUrl, SmartFileConfig};

    fn session() -> Arc<HttpClient> {
        let config = SmartFileConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_password(ApiPassword::new("password").unwrap())
            .base_url(BaseUrl::new("http://host").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config).unwrap())
    }

    #[test]
    fn test_user_template() {
        assert_eq!(USER_TEMPLATE.to_string(), "user/{id}/");
    }

    #[test]
    fn test_user_urls() {
        let users = UserApi::new(session());
        assert_eq!(
            users.endpoint().url(&["bobafett"]).unwrap(),
            "http://host/api/2/user/bobafett/"
        );
        assert_eq!(users.endpoint().url(&[""]).unwrap(), "http://host/api/2/user/");
    }

    #[test]
    fn test_user_supports_crud() {
        let users = UserApi::new(session());
        assert_eq!(users.endpoint().capabilities(), Capabilities::CRUD);
        assert_eq!(users.endpoint().name(), "user");
    }
}
