//! Request/response DTOs for the payments API.

use serde::{Deserialize, Serialize};

use crate::application::handlers::payments::IntentCreated;

/// Request body for `POST /payments/intent`.
#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    /// Amount in kobo/cents.
    pub amount: i64,

    /// Currency code; defaults to the configured currency when omitted.
    #[serde(default)]
    pub currency: Option<String>,

    /// Merchant transaction reference.
    pub reference: String,

    /// Customer email.
    pub email: String,
}

/// Response body for `POST /payments/intent`.
#[derive(Debug, Serialize)]
pub struct CreateIntentResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub data: IntentData,
}

/// Intent details echoed back to the storefront.
#[derive(Debug, Serialize)]
pub struct IntentData {
    pub reference: String,
    pub amount: i64,
    pub currency: String,
    pub email: String,
    pub authorization_url: String,
    pub access_code: String,
}

impl From<IntentCreated> for CreateIntentResponse {
    fn from(result: IntentCreated) -> Self {
        Self {
            status: "ok",
            provider: "paystack",
            data: IntentData {
                reference: result.intent.reference,
                amount: result.intent.amount,
                currency: result.intent.currency,
                email: result.intent.email,
                authorization_url: result.authorization.authorization_url,
                access_code: result.authorization.access_code,
            },
        }
    }
}

/// Response body for an accepted webhook delivery.
#[derive(Debug, Serialize)]
pub struct WebhookAckResponse {
    pub received: bool,
}

/// Health probe response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Error response body for all payments endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code.
    pub error: String,

    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
