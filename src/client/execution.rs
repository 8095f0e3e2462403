//! 请求执行逻辑：同步生成、任务提交与单次结果轮询。
//!
//! Request execution logic (single attempt, no retries).

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::core::{GatewayClient, LICENSE_KEY_HEADER};
use super::decode::{decode_as, GatewayResponse};
use super::endpoint::{EndpointKind, Operation};
use super::error_classification::PollStatus;
use super::payload;
use crate::jobs::{submit_and_await, JobHandle};
use crate::transport::{Gateway, GatewayRequest, RawResponse};
use crate::types::{AsyncJobRequest, ContentRequest, JobId, JobOutcome, RequestMode};
use crate::{Error, ErrorContext, Result};

pub(crate) const JOB_ID_QUERY_PARAM: &str = "jobId";

impl GatewayClient {
    /// One blocking round trip: build, POST to `<op>/generate`, decode.
    pub(crate) async fn execute_generate<T: GatewayResponse>(
        &self,
        operation: Operation,
        request: &ContentRequest,
    ) -> Result<T> {
        let payload = payload::build(request, RequestMode::Generate)?;
        let url = self.endpoints.url(operation, EndpointKind::Generate);
        let request = GatewayRequest::post(url, payload)
            .header(LICENSE_KEY_HEADER, self.config.license_key.as_str());

        let start = Instant::now();
        let response = self.gateway.send(request).await?;
        let body = success_body(response, operation, EndpointKind::Generate)?;
        let value = decode_as::<T>(&body)?;

        info!(
            operation = operation.name(),
            duration_ms = start.elapsed().as_millis(),
            "generation completed"
        );
        Ok(value)
    }

    /// POST to `<op>/queue` and decode the job id.
    pub(crate) async fn execute_submit(
        &self,
        operation: Operation,
        request: &AsyncJobRequest,
    ) -> Result<JobId> {
        let payload = payload::build(&request.content, RequestMode::Queue(&request.job))?;
        let url = self.endpoints.url(operation, EndpointKind::Queue);
        let request = GatewayRequest::post(url, payload)
            .header(LICENSE_KEY_HEADER, self.config.license_key.as_str());

        let response = self.gateway.send(request).await?;
        let body = success_body(response, operation, EndpointKind::Queue)?;
        let job_id: JobId = decode_as(&body)?;

        info!(operation = operation.name(), job_id = %job_id, "job queued");
        Ok(job_id)
    }

    /// Submit, then hand back a handle whose loop polls `<op>/queue/results`.
    pub(crate) async fn execute_job<T>(
        &self,
        operation: Operation,
        request: &AsyncJobRequest,
    ) -> Result<JobHandle<T>>
    where
        T: GatewayResponse + Clone + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        let results_url = self.endpoints.url(operation, EndpointKind::QueueResults);
        let license_key = self.config.license_key.clone();

        submit_and_await(&request.job, self.execute_submit(operation, request), move |job_id| {
            let request = GatewayRequest::get(results_url.clone())
                .header(LICENSE_KEY_HEADER, license_key.as_str())
                .query_param(JOB_ID_QUERY_PARAM, job_id.as_str());
            poll_once::<T>(Arc::clone(&gateway), operation, request)
        })
        .await
    }
}

/// One poll of a results endpoint, classified for the polling loop.
///
/// 404 means the job is still running. Transport errors end the loop.
pub(crate) async fn poll_once<T: GatewayResponse>(
    gateway: Arc<dyn Gateway>,
    operation: Operation,
    request: GatewayRequest,
) -> JobOutcome<T> {
    let response = match gateway.send(request).await {
        Ok(response) => response,
        Err(err) => return JobOutcome::Failed(err),
    };

    match PollStatus::from_http_status(response.status) {
        PollStatus::Pending => JobOutcome::Pending,
        PollStatus::Ready => decode_as::<T>(&response.body).into(),
        PollStatus::Failed => {
            JobOutcome::Failed(remote_error(&response, operation, EndpointKind::QueueResults))
        }
    }
}

fn success_body(
    response: RawResponse,
    operation: Operation,
    kind: EndpointKind,
) -> Result<bytes::Bytes> {
    if response.is_success() {
        debug!(
            operation = operation.name(),
            http_status = response.status,
            "gateway accepted request"
        );
        Ok(response.body)
    } else {
        Err(remote_error(&response, operation, kind))
    }
}

fn remote_error(response: &RawResponse, operation: Operation, kind: EndpointKind) -> Error {
    let err = Error::remote(response.status, &response.text()).with_context(
        ErrorContext::new()
            .with_source(format!("{}.{}", operation.name(), kind.name()))
            .with_details(format!("HTTP {}", response.status)),
    );
    warn!(
        operation = operation.name(),
        endpoint = kind.name(),
        http_status = response.status,
        error_code = err.kind().code(),
        "gateway rejected request"
    );
    err
}
