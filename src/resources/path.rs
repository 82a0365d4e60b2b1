//! The composite path resource.
//!
//! [`PathApi`] coordinates the tree, data and operation families to offer
//! whole-file behaviors:
//!
//! - [`PathApi::download`]: tree lookup for the file id, then a streamed read
//!   of its data written to a local file
//! - [`PathApi::upload`]: tree lookup for the parent folder id, then a
//!   multipart upload of a local file
//! - [`PathApi::remove`], [`PathApi::move_to`], [`PathApi::copy_to`]: submit
//!   an operation, then poll it to completion
//!
//! Calls run strictly one after the other; each step needs the previous
//! step's answer.
//!
//! # Example
//!
//! ```rust,ignore
//! let path = api.path();
//! path.upload("/docs/report.pdf", "report.pdf").await?;
//! let bytes = path.download("copy.pdf", "/docs/report.pdf").await?;
//! let done = path.remove("/docs/report.pdf").await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::clients::{ApiError, HttpClient, HttpResponse, RequestBody};

use super::operation::OperationPoller;
use super::path_data::PathDataApi;
use super::path_oper::PathOperApi;
use super::path_tree::PathTreeApi;

/// Composite handle over `path/tree/`, `path/{id}/data/` and `path/oper/`.
#[derive(Debug, Clone)]
pub struct PathApi {
    tree: PathTreeApi,
    data: PathDataApi,
    oper: PathOperApi,
}

impl PathApi {
    /// Creates the composite and its three sub-handles on one session.
    #[must_use]
    pub fn new(session: Arc<HttpClient>, poller: OperationPoller) -> Self {
        Self {
            tree: PathTreeApi::new(Arc::clone(&session)),
            data: PathDataApi::new(Arc::clone(&session)),
            oper: PathOperApi::new(session, poller),
        }
    }

    /// Returns the tree sub-handle.
    #[must_use]
    pub const fn tree(&self) -> &PathTreeApi {
        &self.tree
    }

    /// Returns the data sub-handle.
    #[must_use]
    pub const fn data(&self) -> &PathDataApi {
        &self.data
    }

    /// Returns the operation sub-handle.
    #[must_use]
    pub const fn oper(&self) -> &PathOperApi {
        &self.oper
    }

    /// Reads the metadata of `path`. Same as [`PathTreeApi::read`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Response`].
    pub async fn read(&self, path: &str, children: bool) -> Result<HttpResponse, ApiError> {
        self.tree.read(path, children).await
    }

    /// Downloads the remote file `src` into the local file `dst` and returns
    /// the number of bytes written.
    ///
    /// The local file is created only once the data read has succeeded. If
    /// the transfer breaks off, the partial file is left in place.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Response`] if the tree lookup or the data read fails
    /// - [`ApiError::MissingField`] if the tree metadata has no `id`
    /// - [`ApiError::Request`] on transport failure
    /// - [`ApiError::Io`] if the local file cannot be written
    pub async fn download(&self, dst: impl AsRef<Path>, src: &str) -> Result<u64, ApiError> {
        let tree = self.tree.read(src, false).await?;
        let id = self.require_id(&tree, src)?;

        let data = self.data.read(&id).await?;
        let mut file = tokio::fs::File::create(dst.as_ref()).await?;
        let written = data.write_to(&mut file).await?;

        tracing::info!(
            "Downloaded {} ({} bytes) to {}",
            src,
            written,
            dst.as_ref().display()
        );
        Ok(written)
    }

    /// Uploads the local file `src` to the remote path `dst`.
    ///
    /// The file lands in the parent folder of `dst` under `dst`'s base name,
    /// which is used both as the multipart field name and as the file name.
    /// The file is streamed, not read into memory.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Io`] if `src` cannot be opened
    /// - [`ApiError::Response`] if the tree lookup or the upload fails
    /// - [`ApiError::MissingField`] if the folder metadata has no `id`
    /// - [`ApiError::Request`] on transport failure
    pub async fn upload(&self, dst: &str, src: impl AsRef<Path>) -> Result<HttpResponse, ApiError> {
        let (parent, name) = split_remote(dst);

        let tree = self.tree.read(parent, false).await?;
        let id = self.require_id(&tree, parent)?;

        let file = tokio::fs::File::open(src.as_ref()).await?;
        let length = file.metadata().await?.len();
        let part = Part::stream_with_length(reqwest::Body::from(file), length)
            .file_name(name.to_string());
        let form = Form::new().part(name.to_string(), part);

        let response = self.data.create(RequestBody::from(form), &id).await?;
        tracing::info!("Uploaded {} ({} bytes) to {}", src.as_ref().display(), length, dst);
        Ok(response)
    }

    /// Removes `path` and waits for the removal to finish.
    ///
    /// Returns the final status response, or the submission response if the
    /// service did not hand out a status URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] if the submission fails and
    /// [`ApiError::Request`] on transport failure. A failed or unfinished
    /// operation is not an error; inspect the returned response.
    pub async fn remove(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let submission = self.oper.remove(path).await?;
        self.follow(submission).await
    }

    /// Moves `src` into the folder `dst` and waits for the move to finish.
    ///
    /// # Errors
    ///
    /// Same as [`PathApi::remove`].
    pub async fn move_to(&self, src: &str, dst: &str) -> Result<HttpResponse, ApiError> {
        let submission = self.oper.move_to(src, dst).await?;
        self.follow(submission).await
    }

    /// Copies `src` into the folder `dst` and waits for the copy to finish.
    ///
    /// # Errors
    ///
    /// Same as [`PathApi::remove`].
    pub async fn copy_to(&self, src: &str, dst: &str) -> Result<HttpResponse, ApiError> {
        let submission = self.oper.copy_to(src, dst).await?;
        self.follow(submission).await
    }

    async fn follow(&self, submission: HttpResponse) -> Result<HttpResponse, ApiError> {
        if submission.code != 200 {
            return Ok(submission);
        }

        match submission.str_field("url").map(str::to_owned) {
            Some(url) => self.oper.poll(&url).await,
            None => {
                tracing::warn!("Operation submission returned no status URL; not polling");
                Ok(submission)
            }
        }
    }

    fn require_id(&self, tree: &HttpResponse, path: &str) -> Result<String, ApiError> {
        tree.id_field("id").ok_or_else(|| ApiError::MissingField {
            url: self
                .tree
                .endpoint()
                .url(&[path])
                .unwrap_or_else(|_| path.to_string()),
            field: "id",
        })
    }
}

/// Splits a remote path into its parent folder and base name.
///
/// Remote paths always use `/`, whatever the local platform.
fn split_remote(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(i) => (&path[..i], &path[i + 1..]),
        None => ("/", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_remote_nested() {
        assert_eq!(split_remote("/docs/2024/report.pdf"), ("/docs/2024", "report.pdf"));
    }

    #[test]
    fn test_split_remote_root() {
        assert_eq!(split_remote("/report.pdf"), ("/", "report.pdf"));
        assert_eq!(split_remote("report.pdf"), ("/", "report.pdf"));
    }

    #[test]
    fn test_split_remote_relative() {
        assert_eq!(split_remote("docs/report.pdf"), ("docs", "report.pdf"));
    }
}
