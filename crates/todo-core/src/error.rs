//! Error Types
//!
//! Failures surfaced by the API layer, form validation and configuration.

use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T = ()> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401: bad credentials on login, or a missing/expired bearer token.
    #[error("not authorized{}", suffix(.message))]
    Unauthorized { message: Option<String> },

    #[error("server responded with status {status}{}", suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Error body shapes the server uses (`{"error": ..}` or `{"message": ..}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.trim().is_empty());

        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }

    /// Human readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("page size must be a positive integer, got {0:?}")]
    InvalidPageSize(String),

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}
