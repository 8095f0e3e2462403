//! Mock HTTP server setup for integration tests

use flexudy_gateway::{Environment, GatewayClient, HttpClientConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const TEST_LICENSE_KEY: &str = "test-license-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a test client pointed at the mock server
    pub fn create_test_client(&self) -> flexudy_gateway::Result<GatewayClient> {
        GatewayClient::builder()
            .license_key(TEST_LICENSE_KEY)
            .environment(Environment::Sandbox)
            .base_url_override(&self.base_url)
            .http_config(
                HttpClientConfig::new()
                    .with_connect_timeout(Duration::from_secs(5))
                    .with_read_timeout(Duration::from_secs(5))
                    .with_write_timeout(Duration::from_secs(5)),
            )
            .build()
    }

    /// Mock a POST endpoint (generate or queue) that checks the license key
    pub async fn mock_post(&self, path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .match_header("licenseKey", TEST_LICENSE_KEY)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a POST endpoint that must never be called
    pub async fn mock_post_never(&self, path: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .with_status(200)
            .expect(0)
            .create_async()
            .await
    }

    /// Mock a POST endpoint whose multipart body must contain `fragment`
    pub async fn mock_post_containing(
        &self,
        path: &str,
        fragment: &str,
        status: u16,
        body: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .match_header("licenseKey", TEST_LICENSE_KEY)
            .match_body(Matcher::Regex(regex::escape(fragment)))
            .with_status(status as usize)
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a job results endpoint for one job id
    pub async fn mock_results(&self, path: &str, job_id: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path)
            .match_header("licenseKey", TEST_LICENSE_KEY)
            .match_query(Matcher::UrlEncoded("jobId".into(), job_id.into()))
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a job results endpoint that must never be polled
    pub async fn mock_results_never(&self, path: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(404)
            .expect(0)
            .create_async()
            .await
    }
}
