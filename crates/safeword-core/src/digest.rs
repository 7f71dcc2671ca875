//! SHA-256 digest of a canonical recipient pair

use crate::recipients::RecipientPair;
use sha2::{Digest, Sha256};
use std::fmt;

/// Digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest over the concatenated, sorted recipients
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairDigest([u8; DIGEST_LEN]);

impl PairDigest {
    /// Hash a canonical recipient pair
    pub fn of(pair: &RecipientPair) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(pair.first().as_bytes());
        hasher.update(pair.second().as_bytes());
        Self(hasher.finalize().into())
    }

    /// Wrap raw digest bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for PairDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PairDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairDigest({})", self.to_hex())
    }
}

impl fmt::Display for PairDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_of_alice_bob() {
        let digest = PairDigest::of(&RecipientPair::new("alice", "bob"));
        assert_eq!(
            digest.to_hex(),
            "a83ab2505ace9a8705ea2f0f4187087dc38947110596cf40cdd906d2cd3a9e6a"
        );
    }

    #[test]
    fn test_digest_of_empty_pair() {
        let digest = PairDigest::of(&RecipientPair::new("", ""));
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_matches_concatenation_hash() {
        let pair = RecipientPair::new("carol", "alice");
        let expected: [u8; DIGEST_LEN] = Sha256::digest(pair.concatenated()).into();
        assert_eq!(PairDigest::of(&pair).as_bytes(), &expected);
    }

    #[test]
    fn test_debug_shows_hex() {
        let digest = PairDigest::from_bytes([0u8; DIGEST_LEN]);
        assert_eq!(format!("{digest:?}"), format!("PairDigest({})", "00".repeat(32)));
    }
}
