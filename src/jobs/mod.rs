//! 异步任务模块：提交任务后在后台轮询结果，并提供可等待、可取消的句柄。
//!
//! Asynchronous jobs.
//!
//! A job is submitted once, then its results endpoint is polled on a fixed
//! interval until the gateway reports a terminal state. Each submission gets
//! its own background task and its own [`JobHandle`].

mod handle;
mod poller;

pub use handle::JobHandle;
pub use poller::submit_and_await;
