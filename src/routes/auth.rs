// SPDX-License-Identifier: MIT

//! Registration and login routes (exempt from the auth gate).

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::services::{derive_slug, validation};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: i64,
}

/// Register a new user.
///
/// Validation runs before any storage call; a phone that already has a
/// record is a conflict. Atomic from the caller's perspective: either the
/// record exists afterwards or exactly one error came back.
async fn register(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest)?;

    validation::validate_phone(&request.phone)?;
    validation::validate_password(&request.password)?;

    if state.store.find_by_phone(&request.phone).await?.is_some() {
        return Err(AppError::Conflict("user with phone number already exists"));
    }

    let password_hash = state.passwords.hash(&request.password).await?;
    let slug = derive_slug(&request.phone);

    let id = state
        .store
        .create(NewUser {
            slug,
            full_name: request.full_name,
            phone: request.phone,
            password_hash,
        })
        .await?;

    tracing::info!(id, "user registered");

    Ok(Json(RegisterResponse { id }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub token: String,
}

/// Log in with phone and password; returns a signed session token with
/// the stored slug as subject.
async fn login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest)?;

    validation::validate_phone(&request.phone)?;

    let user = state
        .store
        .find_by_phone(&request.phone)
        .await?
        .ok_or(AppError::NotFound("user not found"))?;

    if !state
        .passwords
        .verify(&request.password, &user.password_hash)
        .await?
    {
        return Err(AppError::Unauthorized);
    }

    let token = state.tokens.issue(&user.slug)?;

    tracing::info!(id = user.id, "user logged in");

    Ok(Json(LoginResponse { id: user.id, token }))
}
