//! Generic CRUD handle bound to one resource family.
//!
//! A [`ResourceEndpoint`] pairs a static [`PathTemplate`] with the shared
//! [`HttpClient`]. Every operation resolves the template with the caller's
//! positional arguments, performs one call and normalizes the response, so
//! all four operations share the same error semantics.
//!
//! The [`Capabilities`] set records which operations the family supports;
//! calling any other one fails with [`ApiError::Unsupported`] before a
//! request is made.

use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

use crate::clients::{
    ApiError, DataResponse, HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestBody,
};
use crate::rest::PathTemplate;

/// Operations a resource family may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a resource or submit an operation (POST).
    Create,
    /// Read a resource or collection (GET).
    Read,
    /// Update a resource (POST to the instance URL).
    Update,
    /// Delete a resource (DELETE).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method used for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Read => HttpMethod::Get,
            Self::Update => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Create => 1,
            Self::Read => 1 << 1,
            Self::Update => 1 << 2,
            Self::Delete => 1 << 3,
        }
    }
}

/// The set of [`ResourceOperation`]s a family supports.
///
/// ```rust
/// use smartfile::rest::{Capabilities, ResourceOperation};
///
/// let caps = Capabilities::CREATE | Capabilities::READ;
/// assert!(caps.supports(ResourceOperation::Read));
/// assert!(!caps.supports(ResourceOperation::Delete));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No operation.
    pub const NONE: Self = Self(0);
    /// Create only.
    pub const CREATE: Self = Self(ResourceOperation::Create.bit());
    /// Read only.
    pub const READ: Self = Self(ResourceOperation::Read.bit());
    /// Update only.
    pub const UPDATE: Self = Self(ResourceOperation::Update.bit());
    /// Delete only.
    pub const DELETE: Self = Self(ResourceOperation::Delete.bit());
    /// All four operations.
    pub const CRUD: Self = Self(0b1111);

    /// Returns `true` if `operation` is in the set.
    #[must_use]
    pub const fn supports(&self, operation: ResourceOperation) -> bool {
        self.0 & operation.bit() != 0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops = [
            ResourceOperation::Create,
            ResourceOperation::Read,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ];
        f.debug_set()
            .entries(ops.iter().filter(|op| self.supports(**op)).map(ResourceOperation::as_str))
            .finish()
    }
}

/// A CRUD handle for one resource family.
///
/// Cloning is cheap: the session is shared, not copied.
///
/// # Example
///
/// ```rust,ignore
/// use smartfile::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};
///
/// const ROLE: PathTemplate = PathTemplate::new(&[
///     Segment::Literal("role/"),
///     Segment::Placeholder("id"),
///     Segment::Literal("/"),
/// ]);
///
/// let roles = ResourceEndpoint::new("role", ROLE, Capabilities::CRUD, session);
/// let admin = roles.read(&["admin"], &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ResourceEndpoint {
    name: &'static str,
    template: PathTemplate,
    capabilities: Capabilities,
    session: Arc<HttpClient>,
    base_url: Option<String>,
}

impl ResourceEndpoint {
    /// Creates an endpoint addressing `template` from the session's API root.
    #[must_use]
    pub const fn new(
        name: &'static str,
        template: PathTemplate,
        capabilities: Capabilities,
        session: Arc<HttpClient>,
    ) -> Self {
        Self {
            name,
            template,
            capabilities,
            session,
            base_url: None,
        }
    }

    /// Returns a copy of this endpoint that resolves against `base_url`.
    ///
    /// Used when an earlier response handed out a fully-qualified URL.
    #[must_use]
    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..self.clone()
        }
    }

    /// Returns the resource family name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the URL template.
    #[must_use]
    pub const fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Returns the supported operations.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the shared session.
    #[must_use]
    pub const fn session(&self) -> &Arc<HttpClient> {
        &self.session
    }

    /// Resolves the endpoint's template with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Templating`] if `args` has fewer elements than
    /// the template has placeholders.
    pub fn url(&self, args: &[&str]) -> Result<String, ApiError> {
        Ok(self.template.resolve(args, self.base())?)
    }

    /// Issues a creating write (POST).
    ///
    /// `body` may be [`RequestBody::Empty`] when the URL alone carries the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Templating`],
    /// [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn create(&self, body: RequestBody, args: &[&str]) -> Result<HttpResponse, ApiError> {
        let request = self.build(ResourceOperation::Create, args, &[], body)?;
        self.session.request(request).await
    }

    /// Issues a read (GET) and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Templating`],
    /// [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(
        &self,
        args: &[&str],
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build(ResourceOperation::Read, args, query, RequestBody::Empty)?;
        self.session.request(request).await
    }

    /// Issues a read (GET) and leaves the body as a byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Templating`],
    /// [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read_data(
        &self,
        args: &[&str],
        query: &[(&str, &str)],
    ) -> Result<DataResponse, ApiError> {
        let request = self.build(ResourceOperation::Read, args, query, RequestBody::Empty)?;
        self.session.request_data(request).await
    }

    /// Reads the collection the family's instances live in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Request`] or
    /// [`ApiError::Response`].
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<HttpResponse, ApiError> {
        self.require(ResourceOperation::Read)?;
        let url = self.template.resolve_collection(self.base());
        let request = HttpRequest::builder(HttpMethod::Get, url).query(query).build();
        self.session.request(request).await
    }

    /// Issues an update write (POST to the instance URL).
    ///
    /// With [`RequestBody::Empty`] no body is sent at all.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Templating`],
    /// [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn update(&self, body: RequestBody, args: &[&str]) -> Result<HttpResponse, ApiError> {
        let request = self.build(ResourceOperation::Update, args, &[], body)?;
        self.session.request(request).await
    }

    /// Issues a delete (DELETE).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unsupported`], [`ApiError::Templating`],
    /// [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn delete(&self, args: &[&str]) -> Result<HttpResponse, ApiError> {
        let request = self.build(ResourceOperation::Delete, args, &[], RequestBody::Empty)?;
        self.session.request(request).await
    }

    fn base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.session.api_url())
    }

    fn require(&self, operation: ResourceOperation) -> Result<(), ApiError> {
        if self.capabilities.supports(operation) {
            Ok(())
        } else {
            Err(ApiError::Unsupported {
                resource: self.name,
                operation: operation.as_str(),
            })
        }
    }

    fn build(
        &self,
        operation: ResourceOperation,
        args: &[&str],
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<HttpRequest, ApiError> {
        self.require(operation)?;
        let url = self.url(args)?;
        Ok(HttpRequest::builder(operation.http_method(), url)
            .query(query)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiPassword, BaseUrl, SmartFileConfig};
    use crate::rest::Segment;

    const USER: PathTemplate = PathTemplate::new(&[
        Segment::Literal("user/"),
        Segment::Placeholder("id"),
        Segment::Literal("/"),
    ]);

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
    fn test_operation_http_methods() {
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Read.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Delete.http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_capabilities_combine() {
        let caps = Capabilities::CREATE | Capabilities::READ;
        assert!(caps.supports(ResourceOperation::Create));
        assert!(caps.supports(ResourceOperation::Read));
        assert!(!caps.supports(ResourceOperation::Update));
        assert!(!Capabilities::NONE.supports(ResourceOperation::Read));
        assert_eq!(
            Capabilities::CREATE | Capabilities::READ | Capabilities::UPDATE | Capabilities::DELETE,
            Capabilities::CRUD
        );
        assert_eq!(format!("{caps:?}"), r#"{"create", "read"}"#);
    }

    #[test]
    fn test_url_resolves_from_session_api_root() {
        let endpoint = ResourceEndpoint::new("user", USER, Capabilities::CRUD, session());
        assert_eq!(
            endpoint.url(&["bobafett"]).unwrap(),
            "http://host/api/2/user/bobafett/"
        );
    }

    #[test]
    fn test_url_reports_missing_arguments() {
        let endpoint = ResourceEndpoint::new("user", USER, Capabilities::CRUD, session());
        assert!(matches!(endpoint.url(&[]), Err(ApiError::Templating(_))));
    }

    #[test]
    fn test_with_base_url_overrides_root_only_for_copy() {
        let endpoint = ResourceEndpoint::new("user", USER, Capabilities::CRUD, session());
        let moved = endpoint.with_base_url("https://other.example.com/api/2/");

        assert_eq!(
            moved.url(&["x"]).unwrap(),
            "https://other.example.com/api/2/user/x/"
        );
        assert_eq!(endpoint.url(&["x"]).unwrap(), "http://host/api/2/user/x/");
        assert!(Arc::ptr_eq(moved.session(), endpoint.session()));
    }

    #[tokio::test]
    async fn test_unsupported_operation_fails_before_request() {
        let endpoint = ResourceEndpoint::new("user", USER, Capabilities::READ, session());
        let result = endpoint.delete(&["bobafett"]).await;

        assert!(matches!(
            result,
            Err(ApiError::Unsupported {
                resource: "user",
                operation: "delete"
            })
        ));
    }
}
