use std::sync::Arc;

use super::builder::GatewayClientBuilder;
use super::config::ClientConfig;
use super::endpoint::{Endpoints, Environment, Operation};
use crate::jobs::JobHandle;
use crate::transport::Gateway;
use crate::types::{AsyncJobRequest, ClozeQuestion, ContentRequest, Summary, WhQuestion};
use crate::Result;

/// Header carrying the license key on every request.
pub const LICENSE_KEY_HEADER: &str = "licenseKey";

/// Client for the Flexudy learning gateway.
///
/// Cheap to clone; clones share configuration and the connection pool.
/// Every operation comes in two flavours: `generate_*` waits for the result
/// in a single request, `submit_*_job` queues the work and returns a
/// [`JobHandle`] that polls for it in the background.
#[derive(Clone)]
pub struct GatewayClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) gateway: Arc<dyn Gateway>,
    pub(crate) endpoints: Endpoints,
}

impl GatewayClient {
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::new()
    }

    /// Production client with default HTTP settings.
    pub fn new(license_key: impl Into<String>) -> Result<Self> {
        GatewayClientBuilder::new().license_key(license_key).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    /// Generate fill-in-the-blank questions.
    pub async fn generate_cloze_quiz(&self, request: &ContentRequest) -> Result<Vec<ClozeQuestion>> {
        self.execute_generate(Operation::ClozeQuiz, request).await
    }

    /// Generate question/answer pairs.
    pub async fn generate_wh_quiz(&self, request: &ContentRequest) -> Result<Vec<WhQuestion>> {
        self.execute_generate(Operation::WhQuiz, request).await
    }

    /// Summarize the content into a list of facts.
    pub async fn generate_summary(&self, request: &ContentRequest) -> Result<Summary> {
        self.execute_generate(Operation::Summary, request).await
    }

    /// Queue a cloze quiz job.
    ///
    /// Validation and submission errors are returned here; failures after
    /// the job was accepted surface through the handle.
    pub async fn submit_cloze_quiz_job(
        &self,
        request: &AsyncJobRequest,
    ) -> Result<JobHandle<Vec<ClozeQuestion>>> {
        self.execute_job(Operation::ClozeQuiz, request).await
    }

    pub async fn submit_wh_quiz_job(
        &self,
        request: &AsyncJobRequest,
    ) -> Result<JobHandle<Vec<WhQuestion>>> {
        self.execute_job(Operation::WhQuiz, request).await
    }

    pub async fn submit_summary_job(&self, request: &AsyncJobRequest) -> Result<JobHandle<Summary>> {
        self.execute_job(Operation::Summary, request).await
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("config", &self.config)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
