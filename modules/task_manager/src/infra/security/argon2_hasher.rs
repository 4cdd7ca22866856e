use anyhow::anyhow;
use argon2::password_hash::{PasswordHasher as _, SaltString};
use argon2::Argon2;
use rand::RngCore;

use crate::domain::ports::PasswordHasher;

/// Argon2id with the crate's default parameters and a random 16-byte salt.
///
/// Produces PHC strings (`$argon2id$v=19$...`), so the salt and parameters
/// travel with the hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| anyhow!("salt: {e}"))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow!("argon2: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn verifies(password: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).unwrap();
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn hash_then_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("secret123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "secret123");
        assert!(verifies("secret123", &hash));
        assert!(!verifies("wrong", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = Argon2Hasher::new();
        let a = hasher.hash("pw").unwrap();
        let b = hasher.hash("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_a_parseable_phc_string() {
        let hash = Argon2Hasher::new().hash("pw").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(parsed.salt.is_some());
    }
}
