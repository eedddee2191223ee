// SPDX-License-Identifier: MIT

//! Phone-ID: identity service keyed by phone number.
//!
//! This crate provides the backend API for user registration, credential
//! verification, and signed-session authorization. External identity is a
//! deterministic slug derived from the phone number; sessions are stateless
//! RS256 JWTs.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use config::Config;
use services::{PasswordService, TokenService};
use store::UserStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
    pub passwords: PasswordService,
}
