//! Afrotek auth service entry point.

use afrotek_services::adapters::http::auth::auth_router;
use afrotek_services::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.server.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let app = auth_router().layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Auth service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
