use crate::client::decode::ResponseShape;
use crate::error_code::ErrorKind;
use crate::transport::TransportError;
use std::sync::Arc;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "request.content_urls[1]")
    pub field_path: Option<String>,
    /// Additional context about the error
    pub details: Option<String>,
    /// Source of the error (e.g., "payload_builder", "job_submit", "job_poll")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the gateway client.
///
/// Every variant maps onto one [`ErrorKind`]. The type is `Clone` so that a
/// resolved [`crate::JobHandle`] can return the same error on every wait.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Remote error: HTTP {status}: {message}{}", format_context(.context))]
    Remote {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("Decode error ({shape}): {message}")]
    Decode {
        shape: ResponseShape,
        message: String,
    },

    #[error("Job {job_id} was cancelled")]
    Cancelled { job_id: String },

    #[error("Gave up waiting for job {job_id} after {waited_ms} ms")]
    Timeout { job_id: String, waited_ms: u128 },

    #[error("Runtime error: {message}{}", format_context(.context))]
    Runtime {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new runtime error with structured context
    pub fn runtime_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Runtime {
            message: msg.into(),
            context,
        }
    }

    pub fn decode(shape: ResponseShape, msg: impl Into<String>) -> Self {
        Error::Decode {
            shape,
            message: msg.into(),
        }
    }

    /// Build a remote error from a non-success status and the raw response body.
    ///
    /// 401 and 403 get a human-readable hint; any other status carries the body.
    pub fn remote(status: u16, body: &str) -> Self {
        Error::Remote {
            status,
            message: crate::client::error_classification::user_friendly_message(status, body),
            context: ErrorContext::new(),
        }
    }

    /// Attach (or replace) the structured context on variants that carry one.
    pub fn with_context(mut self, new_context: ErrorContext) -> Self {
        match &mut self {
            Error::Validation { context, .. }
            | Error::Configuration { context, .. }
            | Error::Remote { context, .. }
            | Error::Runtime { context, .. } => *context = new_context,
            _ => {}
        }
        self
    }

    /// The taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Io(_) => ErrorKind::Io,
            Error::Remote { .. } => ErrorKind::Remote,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Cancelled { .. } => ErrorKind::Cancelled,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::Runtime { .. } => ErrorKind::Internal,
        }
    }

    /// The bare message, without the variant prefix or formatted context.
    pub fn message(&self) -> String {
        match self {
            Error::Validation { message, .. }
            | Error::Configuration { message, .. }
            | Error::Remote { message, .. }
            | Error::Decode { message, .. }
            | Error::Runtime { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. }
            | Error::Configuration { context, .. }
            | Error::Remote { context, .. }
            | Error::Runtime { context, .. } => Some(context),
            _ => None,
        }
    }
}
