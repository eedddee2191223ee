// SPDX-License-Identifier: MIT

//! Phone-ID API Server
//!
//! Identity service keyed by phone number: registration, login, and
//! profile access behind stateless signed-session tokens.

use phone_id::{
    config::Config,
    services::{PasswordService, TokenService},
    store::{MemoryStore, UserStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Phone-ID API");

    // Load the signing key pair. Failure here is fatal: without the key
    // the service can neither issue nor verify a single token.
    let tokens = Arc::new(
        TokenService::from_key_file(&config.private_key_path, config.token_ttl)
            .expect("Failed to load signing key"),
    );
    tracing::info!(path = %config.private_key_path, "Signing key loaded");

    let passwords = PasswordService::new(config.max_concurrent_hashes);
    let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        tokens,
        passwords,
    });

    // Build router
    let app = phone_id::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("phone_id=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
