// SPDX-License-Identifier: MIT

//! Domain models.

pub mod user;

pub use user::{NewUser, UserRecord};
