//! Submit-then-poll loop.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::handle::JobHandle;
use crate::types::{JobId, JobOptions, JobOutcome};
use crate::{Error, Result};

/// Run `submit`, then poll for the result on a background task.
///
/// A failed submission is returned directly and nothing is polled. On
/// success the caller gets a [`JobHandle`] immediately while the loop
/// sleeps `options.poll_interval_secs`, calls `poll` once, and repeats until
/// `poll` reports `Ready` or `Failed` or the handle is cancelled. There is no
/// attempt limit and no backoff.
pub async fn submit_and_await<T, S, P, PFut>(
    options: &JobOptions,
    submit: S,
    poll: P,
) -> Result<JobHandle<T>>
where
    T: Clone + Send + 'static,
    S: Future<Output = Result<JobId>>,
    P: FnMut(JobId) -> PFut + Send + 'static,
    PFut: Future<Output = JobOutcome<T>> + Send + 'static,
{
    let job_id = submit.await?;
    debug!(job_id = %job_id, "job submitted");

    let cancel = CancellationToken::new();
    let task = tokio::spawn(poll_until_terminal(
        job_id.clone(),
        options.poll_interval(),
        cancel.clone(),
        poll,
    ));
    Ok(JobHandle::new(job_id, cancel, task))
}

async fn poll_until_terminal<T, P, PFut>(
    job_id: JobId,
    interval: Duration,
    cancel: CancellationToken,
    mut poll: P,
) -> Result<T>
where
    P: FnMut(JobId) -> PFut,
    PFut: Future<Output = JobOutcome<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        if interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            debug!(
                job_id = %job_id,
                interval_secs = interval.as_secs(),
                "waiting before polling job result"
            );
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(&job_id, attempt)),
                _ = tokio::time::sleep(interval) => {}
            }
        }
        if cancel.is_cancelled() {
            return Err(cancelled(&job_id, attempt));
        }

        attempt += 1;
        debug!(job_id = %job_id, attempt, "polling job result");
        match poll(job_id.clone()).await {
            JobOutcome::Pending => {
                debug!(job_id = %job_id, attempt, "job result not available yet");
            }
            JobOutcome::Ready(value) => {
                info!(job_id = %job_id, attempts = attempt, "job completed");
                return Ok(value);
            }
            JobOutcome::Failed(err) => {
                warn!(
                    job_id = %job_id,
                    attempts = attempt,
                    error_code = err.kind().code(),
                    error = %err,
                    "job failed"
                );
                return Err(err);
            }
        }
    }
}

fn cancelled(job_id: &JobId, attempts: u32) -> Error {
    info!(job_id = %job_id, attempts, "job polling cancelled");
    Error::Cancelled {
        job_id: job_id.to_string(),
    }
}
