//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; the resulting `Config` is immutable
//! and shared read-only across all requests.

use std::env;
use std::time::Duration;

/// Default session lifetime when `TOKEN_TTL` is absent or unparsable.
/// The fallback is deliberate: a missing TTL must not prevent startup.
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Path to the RS256 private key PEM (PKCS#1 or PKCS#8)
    pub private_key_path: String,
    /// Session token lifetime
    pub token_ttl: Duration,
    /// Upper bound on concurrent password-hashing operations
    pub max_concurrent_hashes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            private_key_path: env::var("PRIVATE_KEY")
                .unwrap_or_else(|_| "cert/id_rsa".to_string()),
            token_ttl: env::var("TOKEN_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_TOKEN_TTL_SECS)),
            max_concurrent_hashes: env::var("MAX_CONCURRENT_HASHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_hash_permits),
        }
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            private_key_path: "cert/id_rsa".to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            max_concurrent_hashes: 2,
        }
    }
}

fn default_hash_permits() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
