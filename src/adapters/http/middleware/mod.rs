//! HTTP middleware.

mod hsts;

pub use hsts::hsts_header;
