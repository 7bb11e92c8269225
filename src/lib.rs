//! Afrotek backend services - auth and payments.
//!
//! This crate implements the Afrotek auth and payments microservices,
//! including Paystack webhook signature verification and payment-intent
//! creation via the Paystack Transaction Initialize API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
