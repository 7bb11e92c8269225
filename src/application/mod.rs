//! Application layer: orchestrates domain logic through ports.

pub mod handlers;
