//! Integration tests with mock HTTP server

pub mod async_jobs;
pub mod mock_server;
pub mod sync_generation;
