// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod auth;
pub mod profile;

use crate::middleware::auth::{enforce_auth, AuthGate};
use crate::AppState;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Paths the auth gate lets through without a token.
const EXEMPT_PATHS: [&str; 3] = ["/register", "/login", "/health"];

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let gate = Arc::new(AuthGate::new(state.tokens.clone(), EXEMPT_PATHS));

    Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(profile::routes())
        .layer(middleware::from_fn_with_state(gate, enforce_auth))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
