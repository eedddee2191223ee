//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account as held by the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric id assigned by the store on creation
    pub id: i64,
    /// External identifier derived from the phone number; token subject
    pub slug: String,
    /// Display name, mutable via profile update
    pub full_name: String,
    /// Natural login key, unique store-side
    pub phone: String,
    /// Adaptive password hash (PHC string). Immutable after creation.
    pub password_hash: String,
}

/// Fields for creating a user record. The store assigns the numeric id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub slug: String,
    pub full_name: String,
    pub phone: String,
    pub password_hash: String,
}
