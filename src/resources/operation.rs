//! Polling of long-running path operations (remove, move, copy).
//!
//! Submitting an operation returns a status URL. [`OperationPoller`] reads
//! that URL a bounded number of times, with a fixed wait between reads,
//! until the operation is over:
//!
//! ```text
//!            +-- body result.status == "SUCCESS" --> Success
//! Pending ---+-- HTTP status != 200 -------------> Failed
//!            +-- check budget exhausted ---------> GaveUp
//! ```
//!
//! Every terminal state hands back the last response as-is; giving up is
//! not an error; callers inspect the response.

use std::time::Duration;

use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{DEFAULT_POLL_CHECKS, DEFAULT_POLL_INTERVAL};

/// Value of `result.status` once an operation has completed.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// State of a long-running operation as seen by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// Still running; more checks may follow.
    Pending,
    /// The service reported `SUCCESS`.
    Success,
    /// A status check answered with something other than HTTP 200.
    Failed,
    /// The check budget ran out while the operation was still pending.
    GaveUp,
}

impl OperationStatus {
    /// Returns `true` for every state except [`OperationStatus::Pending`].
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Classifies one status-check response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        if response.code != 200 {
            return Self::Failed;
        }
        let status = response
            .body
            .pointer("/result/status")
            .and_then(serde_json::Value::as_str);
        if status == Some(STATUS_SUCCESS) {
            Self::Success
        } else {
            Self::Pending
        }
    }
}

/// A submitted operation being tracked through its status URL.
///
/// Only [`OperationPoller`] advances it.
#[derive(Debug, Clone)]
pub struct OperationHandle {
    poll_url: String,
    status: OperationStatus,
    polls: u32,
    response: Option<HttpResponse>,
}

impl OperationHandle {
    /// Starts tracking the operation behind `poll_url`.
    #[must_use]
    pub fn new(poll_url: impl Into<String>) -> Self {
        Self {
            poll_url: poll_url.into(),
            status: OperationStatus::Pending,
            polls: 0,
            response: None,
        }
    }

    /// Returns the status URL.
    #[must_use]
    pub fn poll_url(&self) -> &str {
        &self.poll_url
    }

    /// Returns the current state.
    #[must_use]
    pub const fn status(&self) -> OperationStatus {
        self.status
    }

    /// Returns how many status checks have been made.
    #[must_use]
    pub const fn polls(&self) -> u32 {
        self.polls
    }

    /// Returns the last status-check response, if any check was made.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Consumes the handle, returning the last status-check response.
    #[must_use]
    pub fn into_response(self) -> Option<HttpResponse> {
        self.response
    }
}

/// Bounded, fixed-interval poller for long-running operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationPoller {
    checks: u32,
    interval: Duration,
}

impl Default for OperationPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_CHECKS, DEFAULT_POLL_INTERVAL)
    }
}

impl OperationPoller {
    /// Creates a poller making at most `checks` status checks (at least
    /// one) with `interval` between two of them.
    #[must_use]
    pub fn new(checks: u32, interval: Duration) -> Self {
        Self {
            checks: checks.max(1),
            interval,
        }
    }

    /// Returns the check budget.
    #[must_use]
    pub const fn checks(&self) -> u32 {
        self.checks
    }

    /// Returns the wait between two checks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls `url` until the operation ends and returns the last response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if a status check gets no response.
    /// Non-200 statuses are returned, not raised.
    pub async fn poll(&self, session: &HttpClient, url: &str) -> Result<HttpResponse, ApiError> {
        let mut handle = OperationHandle::new(url);
        let response = self.drive(session, &mut handle).await?;
        Ok(response.clone())
    }

    /// Advances `handle` until it reaches a terminal state and returns the
    /// last response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if a status check gets no response;
    /// the handle keeps the state it had before that check.
    pub async fn drive<'h>(
        &self,
        session: &HttpClient,
        handle: &'h mut OperationHandle,
    ) -> Result<&'h HttpResponse, ApiError> {
        let last = loop {
            let request = HttpRequest::builder(HttpMethod::Get, handle.poll_url.as_str()).build();
            let response = session.fetch(request).await?;
            handle.polls += 1;

            let mut status = OperationStatus::from_response(&response);
            tracing::debug!(
                "Operation check {}/{} at {}: HTTP {} -> {:?}",
                handle.polls,
                self.checks,
                handle.poll_url,
                response.code,
                status
            );

            if !status.is_terminal() && handle.polls >= self.checks {
                tracing::warn!(
                    "Operation at {} still pending after {} checks",
                    handle.poll_url,
                    handle.polls
                );
                status = OperationStatus::GaveUp;
            }
            handle.status = status;

            if status.is_terminal() {
                break response;
            }
            handle.response = Some(response);

            tokio::time::sleep(self.interval).await;
        };

        Ok(&*handle.response.insert(last))
    }
}
