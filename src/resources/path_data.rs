//! Path data resource handle.
//!
//! `path/{id}/data/` carries file content. Reads are streamed, writes are
//! multipart uploads into the folder with the given id.

use std::sync::Arc;

use crate::clients::{ApiError, DataResponse, HttpClient, HttpResponse, RequestBody};
use crate::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};

/// URL template of the path data family.
pub const PATH_DATA_TEMPLATE: PathTemplate = PathTemplate::new(&[
    Segment::Literal("path/"),
    Segment::Placeholder("id"),
    Segment::Literal("/data/"),
]);

/// Handle for `path/{id}/data/`.
#[derive(Debug, Clone)]
pub struct PathDataApi {
    endpoint: ResourceEndpoint,
}

impl PathDataApi {
    /// Creates the handle on the shared session.
    #[must_use]
    pub fn new(session: Arc<HttpClient>) -> Self {
        Self {
            endpoint: ResourceEndpoint::new(
                "path/data",
                PATH_DATA_TEMPLATE,
                Capabilities::CREATE | Capabilities::READ,
                session,
            ),
        }
    }

    /// Returns the underlying endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Uploads `body` into the folder `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn create(&self, body: RequestBody, id: &str) -> Result<HttpResponse, ApiError> {
        self.endpoint.create(body, &[id]).await
    }

    /// Opens the content of the file `id` as a byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(&self, id: &str) -> Result<DataResponse, ApiError> {
        self.endpoint.read_data(&[id], &[]).await
    }
}
