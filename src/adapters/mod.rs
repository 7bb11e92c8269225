//! Adapters: concrete implementations of ports and the HTTP surface.

pub mod http;
pub mod orders;
pub mod paystack;
