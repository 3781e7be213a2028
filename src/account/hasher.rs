use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

/// One-way password hashing. Implementations must be deterministic so
/// that verification can re-hash the candidate and compare.
pub trait PasswordHasher: Send + Sync {
    /// Hash a password into its opaque stored representation.
    fn hash(&self, password: &str) -> String;

    /// Check a candidate password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> bool {
        self.hash(password) == hash
    }
}

/// SHA-256 digest of the password bytes, base64-encoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        STANDARD.encode(Sha256::digest(password.as_bytes()))
    }
}
