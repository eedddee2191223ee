// SPDX-License-Identifier: MIT

//! Middleware modules (authentication).

pub mod auth;

pub use auth::{enforce_auth, AuthGate, AuthSession};
