//! Auth service HTTP adapter.

mod handlers;
mod routes;

pub use handlers::{HealthResponse, ServiceInfoResponse};
pub use routes::auth_router;
