//! 传输层：单次 HTTP 请求/响应交换，不做重试，也不解释状态码。
//!
//! Transport layer.
//!
//! A [`Gateway`] performs exactly one request/response exchange. Network-level
//! failures surface as [`TransportError`]; every HTTP status, success or not,
//! is handed back to the caller for classification.

pub mod http;

pub use http::{HttpTransport, TransportError};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;

use crate::client::payload::Payload;
use crate::Result;

/// One outbound exchange.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    /// Multipart body; `None` for GET requests.
    pub payload: Option<Payload>,
}

impl GatewayRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            payload: None,
        }
    }

    pub fn post(url: impl Into<String>, payload: Payload) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            payload: Some(payload),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status code and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A single request/response exchange with the gateway.
///
/// Implementations must not retry; the HTTP implementation is [`HttpTransport`].
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send(&self, request: GatewayRequest) -> Result<RawResponse>;
}
