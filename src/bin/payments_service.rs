//! Afrotek payments service entry point.

use std::sync::Arc;

use afrotek_services::adapters::http::payments::{payments_router, PaymentsAppState};
use afrotek_services::adapters::orders::InMemoryOrderStore;
use afrotek_services::adapters::paystack::{PaystackClient, PaystackConfig};
use afrotek_services::config::AppConfig;
use afrotek_services::domain::webhook::PaystackWebhookVerifier;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    // Fails fast on a missing or malformed Paystack secret key
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let paystack_config = PaystackConfig::new(config.payment.paystack_secret_key.clone())
        .with_base_url(config.payment.api_base_url.clone());

    let state = PaymentsAppState {
        verifier: Arc::new(PaystackWebhookVerifier::new(
            config.payment.paystack_secret_key.clone(),
        )),
        payment_provider: Arc::new(PaystackClient::new(paystack_config)),
        // Process-local until the orders service owns a persistent store
        order_store: Arc::new(InMemoryOrderStore::new()),
        default_currency: config.payment.default_currency.clone(),
    };

    let app = payments_router()
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    tracing::info!(
        %addr,
        test_mode = config.payment.is_test_mode(),
        "Payments service listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
