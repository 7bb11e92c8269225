//! Axum router for the payments service.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_intent, handle_paystack_webhook, health, PaymentsAppState};

/// Create the payments service router.
///
/// # Routes
/// - `GET /health` - liveness probe
/// - `POST /payments/intent` - create a payment intent
/// - `POST /payments/webhook` - Paystack webhook intake (no auth; the
///   request is authenticated by its signature)
pub fn payments_router() -> Router<PaymentsAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/payments/intent", post(create_intent))
        .route("/payments/webhook", post(handle_paystack_webhook))
}
