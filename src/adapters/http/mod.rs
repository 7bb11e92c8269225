//! HTTP adapters: axum routers, handlers, and middleware.

pub mod auth;
pub mod middleware;
pub mod payments;
