//! Paystack adapters: real API client and test mock.

mod client;
mod mock;

pub use client::{PaystackClient, PaystackConfig};
pub use mock::MockPaymentProvider;
