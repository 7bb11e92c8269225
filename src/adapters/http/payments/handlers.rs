//! HTTP handlers for the payments service.
//!
//! These handlers connect axum routes to the application layer. The webhook
//! handler takes the body as raw bytes: the signature is computed over the
//! exact bytes received, so nothing may deserialize the payload first.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payments::{
    CreateIntentCommand, CreateIntentError, CreateIntentHandler, ProcessWebhookCommand,
    ProcessWebhookError, ProcessWebhookHandler,
};
use crate::domain::webhook::PaystackWebhookVerifier;
use crate::ports::{OrderError, OrderStore, PaymentProvider};

use super::dto::{CreateIntentRequest, CreateIntentResponse, ErrorResponse, HealthResponse, WebhookAckResponse};

/// Header carrying the provider's claimed signature.
pub const PAYSTACK_SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Shared application state for the payments service.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub verifier: Arc<PaystackWebhookVerifier>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub order_store: Arc<dyn OrderStore>,
    pub default_currency: String,
}

impl PaymentsAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_intent_handler(&self) -> CreateIntentHandler {
        CreateIntentHandler::new(self.payment_provider.clone(), self.default_currency.clone())
    }

    pub fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(self.verifier.clone(), self.order_store.clone())
    }
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// POST /payments/intent - create a payment intent
pub async fn create_intent(
    State(state): State<PaymentsAppState>,
    Json(request): Json<CreateIntentRequest>,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let handler = state.create_intent_handler();
    let cmd = CreateIntentCommand {
        amount: request.amount,
        currency: request.currency,
        reference: request.reference,
        email: request.email,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(CreateIntentResponse::from(result)))
}

/// POST /payments/webhook - Paystack webhook intake
///
/// The body arrives as [`axum::body::Bytes`] and is passed to verification
/// untouched.
pub async fn handle_paystack_webhook(
    State(state): State<PaymentsAppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<impl IntoResponse, PaymentsApiError> {
    let signature = headers
        .get(PAYSTACK_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let handler = state.webhook_handler();
    let cmd = ProcessWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(WebhookAckResponse { received: true })))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum PaymentsApiError {
    Intent(CreateIntentError),
    Webhook(ProcessWebhookError),
}

impl From<CreateIntentError> for PaymentsApiError {
    fn from(err: CreateIntentError) -> Self {
        Self::Intent(err)
    }
}

impl From<ProcessWebhookError> for PaymentsApiError {
    fn from(err: ProcessWebhookError) -> Self {
        Self::Webhook(err)
    }
}

impl IntoResponse for PaymentsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match &self {
            PaymentsApiError::Intent(CreateIntentError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
            }
            PaymentsApiError::Intent(CreateIntentError::Provider(err)) => {
                // Provider details stay in logs, not in client responses
                tracing::error!(error = %err, "Payment provider call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "Payment provider request failed".to_string(),
                )
            }
            PaymentsApiError::Webhook(ProcessWebhookError::Verification(err)) => {
                (err.status_code(), err.error_code(), err.to_string())
            }
            PaymentsApiError::Webhook(ProcessWebhookError::Order(err)) => match err {
                OrderError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND", err.to_string())
                }
                OrderError::MissingField(_) => {
                    (StatusCode::BAD_REQUEST, "EVENT_INVALID", err.to_string())
                }
                OrderError::Storage(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Order update failed".to_string(),
                ),
            },
        };

        let body = ErrorResponse::new(error_code, message);
        (status, Json(body)).into_response()
    }
}
