//! Webhook error types for Paystack webhook handling.
//!
//! Misconfiguration (missing secret), missing inputs, and an actual
//! signature mismatch are distinct variants so callers and logs can tell a
//! broken deployment apart from an active forgery attempt, even though the
//! HTTP mapping keeps the original behavior (400 for missing inputs, 401
//! for a mismatch).

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook verification and processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The webhook secret is unset or empty (configuration fault).
    #[error("Webhook secret is not configured")]
    MissingSecret,

    /// No signature header was present on the request.
    #[error("Missing signature header")]
    MissingSignature,

    /// Computed digest does not match the claimed signature.
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Payload failed to parse after a valid signature.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// Maps the error to an HTTP status code.
    ///
    /// Missing inputs are a client error; only a digest mismatch is
    /// reported as unauthorized. All failures are terminal for the
    /// request, never retried.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSecret | WebhookError::MissingSignature => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::SignatureMismatch => StatusCode::UNAUTHORIZED,
            WebhookError::ParseError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable machine-readable code for API responses and logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            WebhookError::MissingSecret => "WEBHOOK_SECRET_MISSING",
            WebhookError::MissingSignature => "SIGNATURE_MISSING",
            WebhookError::SignatureMismatch => "SIGNATURE_INVALID",
            WebhookError::ParseError(_) => "PAYLOAD_INVALID",
        }
    }
}
