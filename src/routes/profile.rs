// SPDX-License-Identifier: MIT

//! Profile routes (require an authenticated session).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::AuthSession;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub full_name: String,
    pub phone: String,
}

/// Get the authenticated user's profile, looked up by the slug carried in
/// the session claims.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .store
        .find_by_slug(&session.claims.subject)
        .await?
        .ok_or(AppError::NotFound("user not found"))?;

    Ok(Json(ProfileResponse {
        full_name: user.full_name,
        phone: user.phone,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub phone: String,
}

/// Update full name and phone for the authenticated user.
///
/// A phone already belonging to a different record is a conflict; keeping
/// one's own phone is not.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    payload: std::result::Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(request) = payload.map_err(|_| AppError::BadRequest)?;

    if let Some(existing) = state.store.find_by_phone(&request.phone).await? {
        if existing.slug != session.claims.subject {
            return Err(AppError::Conflict("phone number already exists"));
        }
    }

    state
        .store
        .update_profile(&session.claims.subject, &request.full_name, &request.phone)
        .await?;

    Ok(StatusCode::OK)
}
