/*
[INPUT]:  Error sources (validation, HTTP status, transport, serialization)
[OUTPUT]: Structured error types and the ErrorKind classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing classification rules
*/

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Check your connection.";
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// User-facing failure categories of the order pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected locally, nothing was sent
    ValidationFailure,
    /// The exchange answered and refused the request
    ApiRejection,
    /// The exchange could not be reached; the request may still have executed
    NetworkFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkReason {
    Timeout,
    Connection,
}

/// Main error type for the futures adapter
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// User input failed validation
    #[error("{0}")]
    Validation(String),

    /// Exchange returned a non-success status
    #[error("[{code}] {message}")]
    Api { code: i64, message: String },

    /// Request timed out or never reached the exchange
    #[error("{message}")]
    Network {
        reason: NetworkReason,
        message: String,
    },

    /// HTTP failure that is neither a timeout nor a connection problem
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body shape used by the exchange: `{"code": -2010, "msg": "..."}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<i64>,
    msg: Option<String>,
}

impl ExchangeError {
    pub fn validation(message: impl Into<String>) -> Self {
        ExchangeError::Validation(message.into())
    }

    /// Classification for user-facing reporting; `None` means unexpected
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ExchangeError::Validation(_) => Some(ErrorKind::ValidationFailure),
            ExchangeError::Api { .. } => Some(ErrorKind::ApiRejection),
            ExchangeError::Network { .. } => Some(ErrorKind::NetworkFailure),
            ExchangeError::Http(_)
            | ExchangeError::Serialization(_)
            | ExchangeError::UrlParse(_)
            | ExchangeError::Config(_) => None,
        }
    }

    /// Order placement is not idempotent: nothing here is retried automatically.
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ExchangeError::Network {
                reason: NetworkReason::Timeout,
                ..
            }
        )
    }

    /// Create an API error from the status code and raw response body.
    ///
    /// `code`/`msg` come from the JSON body when present, otherwise the HTTP
    /// status and a generic message are used.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let code = parsed
            .as_ref()
            .and_then(|b| b.code)
            .unwrap_or_else(|| i64::from(status.as_u16()));
        let message = parsed
            .and_then(|b| b.msg)
            .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
        ExchangeError::Api { code, message }
    }

    /// Map a transport error from reqwest.
    ///
    /// Timeouts and connection-level failures become `Network`; anything
    /// else stays unclassified.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Network {
                reason: NetworkReason::Timeout,
                message: TIMEOUT_MESSAGE.to_string(),
            }
        } else if err.is_connect() || err.is_request() || err.is_body() {
            ExchangeError::Network {
                reason: NetworkReason::Connection,
                message: format!("Network error: {err}"),
            }
        } else {
            ExchangeError::Http(err)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::ValidationFailure => "Validation Error",
            ErrorKind::ApiRejection => "API Error",
            ErrorKind::NetworkFailure => "Network Error",
        };
        f.write_str(label)
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Tagged outcome of one API call
pub type ApiOutcome<T> = Result<T>;
