//! # flexudy-gateway
//!
//! 这是 Flexudy 学习网关的 Rust 客户端，支持同步生成与异步任务轮询。
//!
//! Client for the Flexudy learning gateway: turn text, URLs or documents into
//! cloze quizzes, question/answer pairs and summaries.
//!
//! ## Overview
//!
//! Every operation is available in two flavours:
//!
//! - **Generate**: one request that returns once the gateway has produced the result.
//! - **Queue**: submit a job, receive a [`JobHandle`] immediately, and let a
//!   background task poll the results endpoint on a fixed interval until the
//!   job completes, fails, or is cancelled.
//!
//! Failures are reported through one [`Error`] type whose [`Error::kind`]
//! separates local problems (validation, I/O, decoding) from network and
//! remote ones.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flexudy_gateway::{AsyncJobRequest, ContentRequest, GatewayClient};
//!
//! #[tokio::main]
//! async fn main() -> flexudy_gateway::Result<()> {
//!     let client = GatewayClient::new("your-license-key")?;
//!
//!     let request = ContentRequest::new().with_text("The capital of France is Paris.");
//!     for question in client.generate_cloze_quiz(&request).await? {
//!         println!("{} -> {}", question.question(), question.answer());
//!     }
//!
//!     let job = AsyncJobRequest::new(request).with_poll_interval_secs(5);
//!     let handle = client.submit_summary_job(&job).await?;
//!     let summary = handle.await?;
//!     println!("{:?}", summary.facts());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, payload building, decoding, endpoints |
//! | [`jobs`] | Submit-then-poll engine and job handles |
//! | [`transport`] | Single-exchange HTTP gateway |
//! | [`types`] | Requests, questions, summaries, job ids |
//! | [`error_code`] | Stable error codes |

pub mod client;
pub mod error_code;
pub mod jobs;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, Environment, GatewayClient, GatewayClientBuilder, HttpClientConfig};
pub use error_code::ErrorKind;
pub use jobs::JobHandle;
pub use types::{
    AsyncJobRequest, ClozeQuestion, ContentFile, ContentRequest, ContentType, JobId, Summary,
    WhQuestion,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
