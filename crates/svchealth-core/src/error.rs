//! Shared error type across svchealth crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Metric could not be built or registered.
    Metric,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Metric => "METRIC",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SvcHealthError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SvcHealthError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("metric registration failed: {0}")]
    Metric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SvcHealthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SvcHealthError::BadRequest(_) => ErrorCode::BadRequest,
            SvcHealthError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SvcHealthError::Metric(_) => ErrorCode::Metric,
            SvcHealthError::Internal(_) => ErrorCode::Internal,
        }
    }
}
