//! Domain layer: pure business types and logic, free of I/O.

pub mod payments;
pub mod webhook;
