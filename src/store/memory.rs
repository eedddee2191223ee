//! In-memory user store.
//!
//! Backs the service in development and tests. Records live in a single
//! `RwLock`-guarded map keyed by slug; no lock is held across an await.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::models::{NewUser, UserRecord};
use crate::store::{StoreError, UserStore};

/// Thread-safe in-memory store.
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend("user map lock poisoned".to_string())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;
        Ok(users.values().find(|u| u.phone == phone).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| Self::lock_poisoned())?;
        Ok(users.get(slug).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<i64, StoreError> {
        let mut users = self.users.write().map_err(|_| Self::lock_poisoned())?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        users.insert(
            user.slug.clone(),
            UserRecord {
                id,
                slug: user.slug,
                full_name: user.full_name,
                phone: user.phone,
                password_hash: user.password_hash,
            },
        );
        Ok(id)
    }

    async fn update_profile(
        &self,
        slug: &str,
        full_name: &str,
        phone: &str,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| Self::lock_poisoned())?;
        if let Some(user) = users.get_mut(slug) {
            user.full_name = full_name.to_string();
            user.phone = phone.to_string();
        }
        Ok(())
    }
}
