//! 错误分类：把所有失败归入固定的几类，并给出稳定的错误码。
//!
//! Error taxonomy for the gateway client.
//!
//! Every [`crate::Error`] maps onto exactly one [`ErrorKind`]. None of the kinds
//! are retried by the client itself; the classification exists so callers can
//! decide what to do with a failure.
//!
//! ## Error Code Categories
//!
//! | Prefix | Category    | Description                                  |
//! |--------|-------------|----------------------------------------------|
//! | E1xxx  | local       | Rejected locally, before or after the call   |
//! | E2xxx  | network     | Transport-level I/O failures                 |
//! | E3xxx  | remote      | Gateway answered with a failure status       |
//! | E4xxx  | operational | Job lifecycle (cancellation, wait timeout)   |
//! | E9xxx  | internal    | Background task failures                     |
//!
//! ## Example
//!
//! ```rust
//! use flexudy_gateway::error_code::ErrorKind;
//!
//! let kind = ErrorKind::Remote;
//! assert_eq!(kind.code(), "E3001");
//! assert_eq!(kind.category(), "remote");
//! assert!(!kind.is_local());
//! ```

use std::fmt;

/// Failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// E1001: Caller-supplied request is malformed (no content source, invalid URL)
    Validation,
    /// E1002: Client could not be configured (missing license key, unknown environment)
    Configuration,
    /// E1003: A content file could not be read while serializing the payload
    Io,
    /// E2001: Connection refused, reset, timed out, or otherwise failed on the wire
    Transport,
    /// E1004: Response body did not parse into the expected shape
    Decode,
    /// E3001: Gateway responded with a non-success status (404 while polling excluded)
    Remote,
    /// E4001: The polling loop was asked to stop before reaching a terminal state
    Cancelled,
    /// E4002: A bounded wait on a job handle expired
    Timeout,
    /// E9999: The background polling task itself failed
    Internal,
}

impl ErrorKind {
    /// Returns the canonical code string (e.g., `"E1001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "E1001",
            Self::Configuration => "E1002",
            Self::Io => "E1003",
            Self::Decode => "E1004",
            Self::Transport => "E2001",
            Self::Remote => "E3001",
            Self::Cancelled => "E4001",
            Self::Timeout => "E4002",
            Self::Internal => "E9999",
        }
    }

    /// Returns the standard name (e.g., `"validation"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Io => "io",
            Self::Transport => "transport",
            Self::Remote => "remote",
            Self::Decode => "decode",
            Self::Cancelled => "cancelled",
            Self::Timeout => "timeout",
            Self::Internal => "internal",
        }
    }

    /// Returns the category: `"local"`, `"network"`, `"remote"`, `"operational"`, or `"internal"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation | Self::Configuration | Self::Io | Self::Decode => "local",
            Self::Transport => "network",
            Self::Remote => "remote",
            Self::Cancelled | Self::Timeout => "operational",
            Self::Internal => "internal",
        }
    }

    /// Local failures are detected on this side of the wire, even when the HTTP exchange succeeded.
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.category(), "local")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
