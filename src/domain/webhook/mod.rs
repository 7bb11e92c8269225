//! Paystack webhook verification domain.

mod errors;
mod event;
mod verifier;

pub use errors::WebhookError;
pub use event::{ChargeData, PaystackEvent, PaystackEventType};
pub use verifier::PaystackWebhookVerifier;

#[cfg(test)]
pub use verifier::compute_test_signature;
