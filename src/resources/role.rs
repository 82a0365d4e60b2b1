//! Role resource handle (`role/{id}/`).

use std::sync::Arc;

use crate::clients::{ApiError, HttpClient, HttpResponse, RequestBody};
use crate::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};

/// URL template of the role family.
pub const ROLE_TEMPLATE: PathTemplate = PathTemplate::new(&[
    Segment::Literal("role/"),
    Segment::Placeholder("id"),
    Segment::Literal("/"),
]);

/// Handle for `role/{id}/`.
#[derive(Debug, Clone)]
pub struct RoleApi {
    endpoint: ResourceEndpoint,
}

impl RoleApi {
    /// Creates the handle on the shared session.
    #[must_use]
    pub const fn new(session: Arc<HttpClient>) -> Self {
        Self {
            endpoint: ResourceEndpoint::new("role", ROLE_TEMPLATE, Capabilities::CRUD, session),
        }
    }

    /// Returns the underlying endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Creates a role from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn create(&self, fields: RequestBody) -> Result<HttpResponse, ApiError> {
        self.endpoint.create(fields, &[""]).await
    }

    /// Reads the role `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(&self, name: &str) -> Result<HttpResponse, ApiError> {
        self.endpoint.read(&[name], &[]).await
    }

    /// Lists roles.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        self.endpoint.list(query).await
    }

    /// Updates the role `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn update(&self, name: &str, fields: RequestBody) -> Result<HttpResponse, ApiError> {
        self.endpoint.update(fields, &[name]).await
    }

    /// Deletes the role `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn delete(&self, name: &str) -> Result<HttpResponse, ApiError> {
        self.endpoint.delete(&[name]).await
    }
}
