//! Path operation resource handle.
//!
//! `path/oper/` accepts long-running file system operations. A submission
//! answers with the URL of a status document, which [`PathOperApi::poll`]
//! follows until the operation ends. [`PathApi`](super::PathApi) chains the
//! two steps.

use std::sync::Arc;

use crate::clients::{ApiError, HttpClient, HttpResponse, RequestBody};
use crate::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};

use super::operation::OperationPoller;

/// URL template of the path operation family.
pub const PATH_OPER_TEMPLATE: PathTemplate = PathTemplate::new(&[Segment::Literal("path/oper/")]);

/// Handle for `path/oper/`. Submissions only, plus status polling.
#[derive(Debug, Clone)]
pub struct PathOperApi {
    endpoint: ResourceEndpoint,
    poller: OperationPoller,
}

impl PathOperApi {
    /// Creates the handle on the shared session.
    #[must_use]
    pub const fn new(session: Arc<HttpClient>, poller: OperationPoller) -> Self {
        Self {
            endpoint: ResourceEndpoint::new(
                "path/oper",
                PATH_OPER_TEMPLATE,
                Capabilities::CREATE,
                session,
            ),
            poller,
        }
    }

    /// Returns the underlying endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Returns the poller used by [`PathOperApi::poll`].
    #[must_use]
    pub const fn poller(&self) -> &OperationPoller {
        &self.poller
    }

    /// Submits the removal of `path` to `path/oper/remove/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn remove(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let body = RequestBody::form([("path", path)]);
        self.endpoint.create(body, &["remove/"]).await
    }

    /// Submits moving `src` into the folder `dst` to `path/oper/move/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn move_to(&self, src: &str, dst: &str) -> Result<HttpResponse, ApiError> {
        let body = RequestBody::form([("src", src), ("dst", dst)]);
        self.endpoint.create(body, &["move/"]).await
    }

    /// Submits copying `src` into the folder `dst` to `path/oper/copy/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn copy_to(&self, src: &str, dst: &str) -> Result<HttpResponse, ApiError> {
        let body = RequestBody::form([("src", src), ("dst", dst)]);
        self.endpoint.create(body, &["copy/"]).await
    }

    /// Follows the status document at `url` until the operation ends.
    ///
    /// See [`OperationPoller::poll`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if a status check gets no response.
    pub async fn poll(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.poller.poll(self.endpoint.session(), url).await
    }
}
