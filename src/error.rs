// src/error.rs
//! Application error types with structured error handling.
//!
//! The adapter has one domain failure, an upstream status the caller asked
//! us to reject. Everything else (transport, malformed bodies, local I/O)
//! is carried through as the underlying library error.

use thiserror::Error;

/// How strictly an HTTP status is judged before the body is parsed.
///
/// Tag and post lookups accept any 2xx; page lookups demand exactly 200,
/// matching how the upstream CMS front-ends treat pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any status in the 200..=299 range.
    SuccessRange,
    /// Only `200 OK`.
    ExactOk,
}

impl StatusPolicy {
    /// Whether `status` passes this policy.
    pub fn accepts(self, status: reqwest::StatusCode) -> bool {
        match self {
            Self::SuccessRange => status.is_success(),
            Self::ExactOk => status == reqwest::StatusCode::OK,
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("WordPress API fetch error: {url} (code: {})", status.as_u16())]
    FetchFailed {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// The upstream status code, when the failure came from a rejected response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::FetchFailed { status, .. } => Some(*status),
            Self::NetworkFailure(e) => e.status(),
            _ => None,
        }
    }
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn fetch_failure_message_carries_url_and_code() {
        let err = AppError::FetchFailed {
            url: "https://blog.example.com/wp-json/wp/v2/tags?slug=rust".to_string(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            err.to_string(),
            "WordPress API fetch error: https://blog.example.com/wp-json/wp/v2/tags?slug=rust (code: 502)"
        );
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn success_range_accepts_any_2xx() {
        assert!(StatusPolicy::SuccessRange.accepts(StatusCode::OK));
        assert!(StatusPolicy::SuccessRange.accepts(StatusCode::NON_AUTHORITATIVE_INFORMATION));
        assert!(!StatusPolicy::SuccessRange.accepts(StatusCode::NOT_FOUND));
    }

    #[test]
    fn exact_ok_rejects_other_2xx() {
        assert!(StatusPolicy::ExactOk.accepts(StatusCode::OK));
        assert!(!StatusPolicy::ExactOk.accepts(StatusCode::NON_AUTHORITATIVE_INFORMATION));
        assert!(!StatusPolicy::ExactOk.accepts(StatusCode::NOT_FOUND));
    }

    #[test]
    fn anyhow_errors_become_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::InternalError { ref message, .. } if message == "boom"));
    }
}
