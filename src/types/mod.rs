//! 类型系统模块：请求、题目、摘要与任务相关的核心数据类型。
//!
//! # Types Module
//!
//! Value types exchanged with the gateway. All of them are immutable after
//! construction; none are shared mutably between concurrent calls.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ContentRequest`] | Source material (text, URLs, files) plus content type |
//! | [`AsyncJobRequest`] | A [`ContentRequest`] with queue options (poll interval, webhook) |
//! | [`ClozeQuestion`] | Fill-in-the-blank question with an inline answer span |
//! | [`WhQuestion`] | Explicit question/answer pair |
//! | [`Summary`] | Ordered list of fact strings |
//! | [`JobId`] | Identifier returned by a queue submission |
//! | [`JobOutcome`] | Result of a single poll attempt |
//!
//! ## Example
//!
//! ```rust
//! use flexudy_gateway::types::{AsyncJobRequest, ContentRequest, ContentType};
//!
//! let request = ContentRequest::new()
//!     .with_url("https://flexudy.com")
//!     .with_content_type(ContentType::Document);
//!
//! let job = AsyncJobRequest::from(request)
//!     .with_poll_interval_secs(5)
//!     .with_webhook_url("https://your-server/path");
//! assert_eq!(job.job.poll_interval_secs, 5);
//! ```

pub mod job;
pub mod quiz;
pub mod request;
pub mod summary;

pub use job::{JobId, JobOutcome};
pub use quiz::{ClozeQuestion, WhQuestion, DEFAULT_BLANK_SYMBOL};
pub use request::{
    AsyncJobRequest, ContentFile, ContentRequest, ContentType, FileSource, JobOptions,
    RequestMode, DEFAULT_POLL_INTERVAL_SECS,
};
pub use summary::Summary;
