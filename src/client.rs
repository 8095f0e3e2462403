//! Gateway client.
//!
//! Keep the public surface small: [`GatewayClient`] plus its builder.
//! Request building, decoding and classification live in submodules under
//! `src/client/` and are exposed for callers that drive the gateway directly.

pub mod builder;
pub mod config;
pub mod core;
pub mod decode;
pub mod endpoint;
pub mod error_classification;
mod execution;
pub mod payload;

pub use builder::GatewayClientBuilder;
pub use config::{ClientConfig, HttpClientConfig};
pub use core::{GatewayClient, LICENSE_KEY_HEADER};
pub use decode::{decode, decode_as, Decoded, GatewayResponse, ResponseShape};
pub use endpoint::{resolve_host, EndpointKind, Endpoints, Environment, Operation};
pub use payload::Payload;
