use crate::client::config::HttpClientConfig;
use crate::transport::{Gateway, GatewayRequest, RawResponse};
use crate::Result;
use async_trait::async_trait;
use reqwest::Proxy;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// reqwest-backed [`Gateway`].
///
/// One instance owns one connection pool; timeouts are fixed at construction.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| TransportError::Other(format!("invalid proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Gateway for HttpTransport {
    async fn send(&self, request: GatewayRequest) -> Result<RawResponse> {
        let GatewayRequest {
            method,
            url,
            headers,
            query,
            payload,
        } = request;

        let mut req = self.client.request(method.clone(), &url);
        for (name, value) in &headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(&query);
        }
        if let Some(payload) = payload {
            // File parts are read here, so I/O failures surface before anything is sent.
            req = req.multipart(payload.into_form().await?);
        }

        let start = Instant::now();
        let resp = req.send().await.map_err(TransportError::from)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(TransportError::from)?;

        debug!(
            http_status = status,
            method = method.as_str(),
            endpoint = url.as_str(),
            duration_ms = start.elapsed().as_millis(),
            body_len = body.len(),
            "gateway exchange completed"
        );

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(Arc<reqwest::Error>),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_connect())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(Arc::new(err))
    }
}
