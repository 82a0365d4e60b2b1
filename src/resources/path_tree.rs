//! Path tree resource handle.
//!
//! `path/tree/{path}/` returns the metadata of a file or folder, including
//! the numeric `id` the data endpoint is addressed by. Paths are passed as
//! the caller wrote them; a leading `/` is harmless.

use std::sync::Arc;

use crate::clients::{ApiError, HttpClient, HttpResponse};
use crate::rest::{Capabilities, PathTemplate, ResourceEndpoint, Segment};

/// URL template of the path tree family.
pub const PATH_TREE_TEMPLATE: PathTemplate = PathTemplate::new(&[
    Segment::Literal("path/tree/"),
    Segment::Placeholder("path"),
    Segment::Literal("/"),
]);

/// Handle for `path/tree/{path}/`. Read only.
#[derive(Debug, Clone)]
pub struct PathTreeApi {
    endpoint: ResourceEndpoint,
}

impl PathTreeApi {
    /// Creates the handle on the shared session.
    #[must_use]
    pub const fn new(session: Arc<HttpClient>) -> Self {
        Self {
            endpoint: ResourceEndpoint::new(
                "path/tree",
                PATH_TREE_TEMPLATE,
                Capabilities::READ,
                session,
            ),
        }
    }

    /// Returns the underlying endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Reads the metadata of `path`.
    ///
    /// With `children` set, the listing of a folder's entries is included.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(&self, path: &str, children: bool) -> Result<HttpResponse, ApiError> {
        if children {
            self.endpoint.read(&[path], &[("children", "true")]).await
        } else {
            self.endpoint.read(&[path], &[]).await
        }
    }
}
