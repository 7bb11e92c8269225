//! Payments service HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateIntentRequest, CreateIntentResponse, ErrorResponse, WebhookAckResponse};
pub use handlers::{PaymentsApiError, PaymentsAppState, PAYSTACK_SIGNATURE_HEADER};
pub use routes::payments_router;
