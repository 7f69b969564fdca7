//! Password hashing with Argon2id.
//!
//! Only the PHC hash string is ever persisted; verification re-derives from
//! the stored salt and parameters.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use anyhow::{Result, anyhow};

/// Hash a plaintext password into a PHC-format string with a fresh salt.
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string.
///
/// Returns false on malformed stored hashes as well as mismatches, so the
/// caller cannot distinguish the two cases.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn test_same_password_distinct_hashes() {
        let hash1 = hash_password("hunter2").unwrap();
        let hash2 = hash_password("hunter2").unwrap();
        // Fresh salt per registration
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_malformed_stored_hash_rejected() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }
}
