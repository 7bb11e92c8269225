//! Application command/query handlers.

pub mod payments;
