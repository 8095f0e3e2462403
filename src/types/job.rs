//! Job identity and per-attempt outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

/// Identifier returned by a queue submission.
///
/// The gateway may send it as a JSON string or integer; both are kept in
/// their textual form and echoed back verbatim as the `jobId` query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Result of one poll attempt. Only `Ready` and `Failed` end the loop.
#[derive(Debug, Clone)]
pub enum JobOutcome<T> {
    /// Results not available yet (the gateway answered 404).
    Pending,
    Ready(T),
    Failed(Error),
}

impl<T> JobOutcome<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobOutcome::Pending)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> JobOutcome<U> {
        match self {
            JobOutcome::Pending => JobOutcome::Pending,
            JobOutcome::Ready(value) => JobOutcome::Ready(f(value)),
            JobOutcome::Failed(err) => JobOutcome::Failed(err),
        }
    }
}

impl<T> From<crate::Result<T>> for JobOutcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => JobOutcome::Ready(value),
            Err(err) => JobOutcome::Failed(err),
        }
    }
}
