// SPDX-License-Identifier: MIT

//! Session authentication middleware.
//!
//! Every request starts unchecked. Requests whose path is on the exempt
//! list pass through untouched; everything else must carry a bearer token
//! that [`TokenService`] accepts, or the request is rejected with a
//! generic 403 that does not reveal why.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::services::token::SessionClaims;
use crate::services::TokenService;

/// Verified claims attached to the request for downstream handlers.
///
/// Retrieved with `Extension<AuthSession>`, which fails the request loudly
/// if the gate did not run.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub claims: SessionClaims,
}

/// Request gate enforcing token presence and validity.
///
/// The exempt-path set is supplied at construction so routing composition
/// stays decoupled from auth logic.
pub struct AuthGate {
    tokens: Arc<TokenService>,
    exempt: HashSet<String>,
}

impl AuthGate {
    pub fn new<I, S>(tokens: Arc<TokenService>, exempt: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens,
            exempt: exempt.into_iter().map(Into::into).collect(),
        }
    }

    fn is_exempt(&self, path: &str) -> bool {
        self.exempt.contains(path)
    }
}

/// Middleware entry point; apply with `middleware::from_fn_with_state`.
pub async fn enforce_auth(
    State(gate): State<Arc<AuthGate>>,
    mut request: Request,
    next: Next,
) -> Response {
    if gate.is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    let Some(token) = bearer_token(&request) else {
        return AppError::Auth.into_response();
    };

    match gate.tokens.verify(token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(AuthSession { claims });
            next.run(request).await
        }
        // Cause is deliberately not surfaced to the caller.
        Err(_) => AppError::Auth.into_response(),
    }
}

/// Extract the token from an `Authorization: Bearer ...` header.
fn bearer_token(request: &Request) -> Option<&str> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
