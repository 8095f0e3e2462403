//! Caller-side reference to a running job.

use futures::future::BoxFuture;
use std::future::IntoFuture;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::types::JobId;
use crate::{Error, ErrorContext, Result};

/// Awaitable, cancellable handle to one polling loop.
///
/// The loop runs on its own task whether or not anyone waits. Once the handle
/// has resolved, every further wait returns the same value or error without
/// polling again. Dropping an unresolved handle cancels its loop.
pub struct JobHandle<T> {
    job_id: JobId,
    cancel: CancellationToken,
    task: Option<JoinHandle<Result<T>>>,
    resolved: Option<Result<T>>,
}

impl<T> JobHandle<T>
where
    T: Clone + Send + 'static,
{
    pub(crate) fn new(job_id: JobId, cancel: CancellationToken, task: JoinHandle<Result<T>>) -> Self {
        Self {
            job_id,
            cancel,
            task: Some(task),
            resolved: None,
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Ask the loop to stop. An in-flight poll may still finish first.
    pub fn cancel(&self) {
        debug!(job_id = %self.job_id, "job cancellation requested");
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once a wait would return without blocking.
    pub fn is_finished(&self) -> bool {
        self.resolved.is_some() || self.task.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }

    /// Wait for the terminal result, however long it takes.
    pub async fn wait(&mut self) -> Result<T> {
        if let Some(resolved) = &self.resolved {
            return resolved.clone();
        }
        // The task stays in place until the join completes, so an abandoned
        // wait leaves the handle resumable.
        let joined = match self.task.as_mut() {
            Some(task) => task.await,
            None => {
                let err = self.missing_task();
                return self.resolve(Err(err));
            }
        };
        self.task = None;
        let outcome = self.join(joined);
        self.resolve(outcome)
    }

    /// Wait at most `timeout` for the terminal result.
    ///
    /// On expiry the loop is cancelled and the handle resolves to
    /// [`Error::Timeout`], which later waits return as well.
    pub async fn wait_timeout(&mut self, timeout: Duration) -> Result<T> {
        if let Some(resolved) = &self.resolved {
            return resolved.clone();
        }
        let start = Instant::now();
        let waited = match self.task.as_mut() {
            Some(task) => tokio::time::timeout(timeout, task).await,
            None => {
                let err = self.missing_task();
                return self.resolve(Err(err));
            }
        };

        match waited {
            Ok(joined) => {
                self.task = None;
                let outcome = self.join(joined);
                self.resolve(outcome)
            }
            Err(_) => {
                self.cancel.cancel();
                self.task = None;
                let waited_ms = start.elapsed().as_millis();
                info!(job_id = %self.job_id, waited_ms, "wait on job timed out, loop cancelled");
                self.resolve(Err(Error::Timeout {
                    job_id: self.job_id.to_string(),
                    waited_ms,
                }))
            }
        }
    }

    fn join(&self, joined: std::result::Result<Result<T>, tokio::task::JoinError>) -> Result<T> {
        joined.unwrap_or_else(|e| {
            Err(Error::runtime_with_context(
                format!("polling task for job {} failed: {}", self.job_id, e),
                ErrorContext::new().with_source("job_handle"),
            ))
        })
    }

    fn missing_task(&self) -> Error {
        Error::runtime_with_context(
            format!("job {} has no polling task", self.job_id),
            ErrorContext::new().with_source("job_handle"),
        )
    }

    fn resolve(&mut self, outcome: Result<T>) -> Result<T> {
        self.resolved = Some(outcome.clone());
        outcome
    }
}

impl<T> Drop for JobHandle<T> {
    fn drop(&mut self) {
        if self.resolved.is_none() {
            self.cancel.cancel();
        }
    }
}

impl<T> IntoFuture for JobHandle<T>
where
    T: Clone + Send + 'static,
{
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'static, Result<T>>;

    fn into_future(mut self) -> Self::IntoFuture {
        Box::pin(async move { self.wait().await })
    }
}

impl<T> std::fmt::Debug for JobHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobHandle")
            .field("job_id", &self.job_id)
            .field("cancelled", &self.cancel.is_cancelled())
            .field("resolved", &self.resolved.is_some())
            .finish()
    }
}
