//! Error types for Stripe client.

use serde::Deserialize;
use thiserror::Error;

/// Result type for Stripe client operations.
pub type Result<T> = std::result::Result<T, StripeError>;

/// Stripe client errors.
#[derive(Debug, Error)]
pub enum StripeError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response: validation rejection, rate limit, auth)
    #[error("Stripe API error ({status}): {message}")]
    Api {
        status: u16,
        error_type: Option<String>,
        code: Option<String>,
        message: String,
    },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Stripe wraps every failure in `{"error": {...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl StripeError {
    /// Build an `Api` error from a non-2xx status and raw response body.
    ///
    /// Falls back to the raw body as the message when the body is not a
    /// Stripe error envelope (e.g. a proxy error page).
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => StripeError::Api {
                status,
                error_type: envelope.error.error_type,
                code: envelope.error.code,
                message: envelope
                    .error
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            },
            Err(_) => StripeError::Api {
                status,
                error_type: None,
                code: None,
                message: body.to_string(),
            },
        }
    }

    /// HTTP status for API errors, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            StripeError::Api { status, .. } => Some(*status),
            StripeError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
