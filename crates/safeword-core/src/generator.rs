//! Phrase derivation for a pair of recipients
//!
//! The pipeline is sort, concatenate, SHA-256, BIP-39. Every step is pure, so
//! both peers of a conversation arrive at the same phrase regardless of which
//! side calls with which argument order.

use crate::digest::PairDigest;
use crate::error::SafewordResult;
use crate::phrase::Phrase;
use crate::recipients::RecipientPair;
use tracing::{debug, trace};

/// Digest of the canonical pair without encoding it
pub fn pair_digest(recipient_a: &str, recipient_b: &str) -> PairDigest {
    PairDigest::of(&RecipientPair::new(recipient_a, recipient_b))
}

/// Derive the verification phrase for two recipients
///
/// # Errors
///
/// Returns [`SafewordError::Encoding`](crate::SafewordError::Encoding) if the
/// encoder rejects the digest. A SHA-256 digest always has a legal length, so
/// this does not happen in practice.
pub fn generate(recipient_a: &str, recipient_b: &str) -> SafewordResult<Phrase> {
    debug!(
        a_len = recipient_a.len(),
        b_len = recipient_b.len(),
        "deriving phrase for recipient pair"
    );

    let digest = pair_digest(recipient_a, recipient_b);
    trace!(digest = %digest, "pair digest computed");

    Phrase::encode(digest.as_bytes())
}

/// Derive the phrase and return it as an owned string
pub fn generate_phrase(recipient_a: &str, recipient_b: &str) -> SafewordResult<String> {
    generate(recipient_a, recipient_b).map(String::from)
}

/// Check a phrase read back by a person against the pair it should belong to
///
/// Case and spacing in `candidate` are not significant. A candidate that is not
/// a BIP-39 phrase at all is an error; a valid phrase for some other pair is
/// `Ok(false)`.
pub fn verify(recipient_a: &str, recipient_b: &str, candidate: &str) -> SafewordResult<bool> {
    let candidate = Phrase::parse(candidate)?;
    let digest = pair_digest(recipient_a, recipient_b);
    let matches = candidate.to_entropy() == digest.as_bytes();

    debug!(matches, "verified candidate phrase");
    Ok(matches)
}
