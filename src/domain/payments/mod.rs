//! Payments domain types.

mod intent;

pub use intent::{IntentError, PaymentIntent};
