// SPDX-License-Identifier: MIT

//! Storage layer.
//!
//! The core depends on the [`UserStore`] contract only; [`MemoryStore`] is
//! the bundled backend. Implementations must be thread-safe and honor the
//! caller's cancellation (no operation may block indefinitely).

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::{NewUser, UserRecord};

/// Storage backend errors. Handlers convert these to a generic internal
/// error; the cause is only logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Provider for user storage operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up a user by phone number (the natural login key).
    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Looks up a user by slug (the external identifier).
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Creates a user record and returns its numeric id.
    async fn create(&self, user: NewUser) -> Result<i64, StoreError>;

    /// Updates full name and phone for the record with the given slug.
    async fn update_profile(
        &self,
        slug: &str,
        full_name: &str,
        phone: &str,
    ) -> Result<(), StoreError>;
}
