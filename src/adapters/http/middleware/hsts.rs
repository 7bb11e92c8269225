//! Strict-Transport-Security response header middleware.

use axum::extract::Request;
use axum::http::header::{HeaderValue, STRICT_TRANSPORT_SECURITY};
use axum::middleware::Next;
use axum::response::Response;

/// One year, including subdomains, preload-list eligible.
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains; preload";

/// Appends the HSTS header to every response.
///
/// Browsers only honor HSTS over HTTPS; the load balancer in front of the
/// service already redirects HTTP to HTTPS.
pub async fn hsts_header(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS_VALUE));
    response
}
