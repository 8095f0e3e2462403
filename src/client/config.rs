//! 客户端配置：构建一次，之后只读共享。
//!
//! Client configuration.
//!
//! Everything here is resolved once by [`crate::GatewayClientBuilder`] and then
//! shared read-only by every call. Business logic never reads the environment.

use std::env;
use std::fmt;
use std::time::Duration;

use super::endpoint::Environment;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 180;

/// HTTP connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by environment variables where set:
    /// - `FLEXUDY_CONNECT_TIMEOUT_SECS`
    /// - `FLEXUDY_READ_TIMEOUT_SECS`
    /// - `FLEXUDY_WRITE_TIMEOUT_SECS`
    /// - `FLEXUDY_HTTP_POOL_MAX_IDLE_PER_HOST`
    /// - `FLEXUDY_PROXY_URL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            connect_timeout: env_secs("FLEXUDY_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout),
            read_timeout: env_secs("FLEXUDY_READ_TIMEOUT_SECS").unwrap_or(defaults.read_timeout),
            write_timeout: env_secs("FLEXUDY_WRITE_TIMEOUT_SECS")
                .unwrap_or(defaults.write_timeout),
            pool_max_idle_per_host: env::var("FLEXUDY_HTTP_POOL_MAX_IDLE_PER_HOST")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
            pool_idle_timeout: defaults.pool_idle_timeout,
            proxy_url: env::var("FLEXUDY_PROXY_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Whole-exchange timeout handed to reqwest, which has no separate
    /// read/write knobs: upload and download budgets combined.
    pub fn request_timeout(&self) -> Duration {
        self.read_timeout.saturating_add(self.write_timeout)
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    pub license_key: String,
    pub environment: Environment,
    /// Resolved from `environment` unless overridden at build time.
    pub base_url: String,
    pub http: HttpClientConfig,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("license_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}
