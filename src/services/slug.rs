//! Stable external-identifier derivation.
//!
//! The slug is the unpadded base64 encoding of the raw phone bytes. It is
//! deterministic and reversible, so it is not a privacy boundary: anyone
//! holding a slug can recover the phone number. Kept as-is so slugs remain
//! stable across deployments; see DESIGN.md.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};

/// Derive the external identifier for a phone number.
///
/// Same phone always yields the same slug; the slug is embedded as the
/// token subject and used as the storage lookup key.
pub fn derive_slug(phone: &str) -> String {
    STANDARD_NO_PAD.encode(phone.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_deterministic() {
        assert_eq!(
            derive_slug("+6281234567890"),
            derive_slug("+6281234567890")
        );
    }

    #[test]
    fn test_distinct_phones_give_distinct_slugs() {
        assert_ne!(
            derive_slug("+6281234567890"),
            derive_slug("+6281234567891")
        );
    }

    #[test]
    fn test_slug_is_unpadded() {
        // 14 bytes of input would produce '=' padding under padded base64
        assert!(!derive_slug("+6281234567890").contains('='));
    }
}
