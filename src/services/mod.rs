// SPDX-License-Identifier: MIT

//! Core services: input validation, credential hashing, slug derivation,
//! and session token issuance/verification.

pub mod password;
pub mod slug;
pub mod token;
pub mod validation;

pub use password::PasswordService;
pub use slug::derive_slug;
pub use token::{SessionClaims, TokenService};
