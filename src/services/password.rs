//! Password hashing and verification using Argon2id.
//!
//! Hashing is CPU-bound, so it runs on the blocking pool behind a
//! semaphore that bounds concurrent operations. Work-factor parameters are
//! fixed (OWASP-recommended Argon2id settings); each hash gets a fresh
//! random salt, so hashing the same password twice yields distinct digests.
//!
//! Neither plaintext passwords nor digests are ever logged or embedded in
//! error values.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use tokio::sync::Semaphore;

/// Memory cost in KiB.
const MEMORY_COST: u32 = 19 * 1024;
/// Time cost (iterations).
const TIME_COST: u32 = 2;
/// Parallelism factor.
const PARALLELISM: u32 = 1;
/// Output hash length in bytes.
const HASH_LENGTH: usize = 32;

/// Credential errors. Messages carry no key material.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("malformed password digest")]
    MalformedDigest,

    #[error("password hashing failed")]
    Hash,
}

/// Adaptive password hasher with bounded concurrency.
#[derive(Clone)]
pub struct PasswordService {
    limiter: Arc<Semaphore>,
}

impl PasswordService {
    /// Create a service allowing at most `max_concurrent` in-flight
    /// hash/verify operations.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            limiter: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Hash a plaintext password into a PHC-formatted digest.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let permit = self
            .limiter
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| PasswordError::Hash)?;
        let password = password.to_string();

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let salt = SaltString::generate(&mut OsRng);
            hasher()?
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| PasswordError::Hash)
        })
        .await
        .map_err(|_| PasswordError::Hash)?
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Returns `Ok(false)` on mismatch; an error only when the digest
    /// itself cannot be parsed.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let permit = self
            .limiter
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| PasswordError::Hash)?;
        let password = password.to_string();
        let digest = digest.to_string();

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let parsed =
                PasswordHash::new(&digest).map_err(|_| PasswordError::MalformedDigest)?;
            match hasher()?.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(_) => Err(PasswordError::MalformedDigest),
            }
        })
        .await
        .map_err(|_| PasswordError::Hash)?
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(HASH_LENGTH))
        .map_err(|_| PasswordError::Hash)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
