//! API Error Types
//!
//! Failures seen by the client when talking to the activities API.

use thiserror::Error;

/// Errors returned by an [`ActivityApi`](super::ActivityApi) transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The server answered with a non-2xx status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server supplied `detail`, if this is an application-level failure
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the HTTP exchange completed with a failure status
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
