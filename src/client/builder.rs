use keyring::Entry;
use std::env;
use std::sync::Arc;
use tracing::debug;

use super::config::{ClientConfig, HttpClientConfig};
use super::core::GatewayClient;
use super::endpoint::{resolve_host, Endpoints, Environment};
use crate::transport::{Gateway, HttpTransport};
use crate::{Error, ErrorContext, Result};

pub const KEYRING_SERVICE: &str = "flexudy-gateway";
pub const KEYRING_USER: &str = "license-key";
pub const LICENSE_KEY_ENV: &str = "FLEXUDY_LICENSE_KEY";
pub const ENVIRONMENT_ENV: &str = "FLEXUDY_ENVIRONMENT";

/// Builder for [`GatewayClient`].
///
/// Keep this surface area small: everything not set explicitly is resolved
/// once in [`build`](Self::build) and never read again.
pub struct GatewayClientBuilder {
    license_key: Option<String>,
    environment: Option<Environment>,
    http: Option<HttpClientConfig>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
    gateway: Option<Arc<dyn Gateway>>,
}

impl GatewayClientBuilder {
    pub fn new() -> Self {
        Self {
            license_key: None,
            environment: None,
            http: None,
            base_url_override: None,
            gateway: None,
        }
    }

    pub fn license_key(mut self, key: impl Into<String>) -> Self {
        self.license_key = Some(key.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// HTTP settings. Defaults to [`HttpClientConfig::from_env`].
    pub fn http_config(mut self, http: HttpClientConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Talk to `base_url` instead of the environment's host.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Replace the HTTP transport, e.g. with a scripted fake in tests.
    pub fn gateway(mut self, gateway: Arc<dyn Gateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Build the client.
    ///
    /// License key: explicit value, then the OS keyring, then
    /// `FLEXUDY_LICENSE_KEY`. Environment: explicit value, then
    /// `FLEXUDY_ENVIRONMENT`, then production.
    pub fn build(self) -> Result<GatewayClient> {
        let license_key = self
            .license_key
            .filter(|k| !k.trim().is_empty())
            .or_else(license_key_from_keyring)
            .or_else(|| non_empty_env(LICENSE_KEY_ENV))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "A license key is required",
                    ErrorContext::new()
                        .with_field_path("license_key")
                        .with_details(format!(
                            "set it on the builder, in the keyring ({}/{}) or via {}",
                            KEYRING_SERVICE, KEYRING_USER, LICENSE_KEY_ENV
                        ))
                        .with_source("client_builder"),
                )
            })?;

        let environment = match self.environment {
            Some(environment) => environment,
            None => match non_empty_env(ENVIRONMENT_ENV) {
                Some(raw) => raw.parse()?,
                None => Environment::default(),
            },
        };

        let base_url = match self.base_url_override {
            Some(url) => url,
            None => resolve_host(Some(environment))?.to_string(),
        };

        let http = self.http.unwrap_or_else(HttpClientConfig::from_env);
        let gateway: Arc<dyn Gateway> = match self.gateway {
            Some(gateway) => gateway,
            None => Arc::new(HttpTransport::new(&http)?),
        };

        debug!(
            environment = environment.as_str(),
            base_url = base_url.as_str(),
            "gateway client configured"
        );

        let endpoints = Endpoints::new(base_url.clone());
        Ok(GatewayClient {
            config: Arc::new(ClientConfig {
                license_key,
                environment,
                base_url,
                http,
            }),
            gateway,
            endpoints,
        })
    }
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn license_key_from_keyring() -> Option<String> {
    let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok().filter(|k| !k.trim().is_empty())
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
