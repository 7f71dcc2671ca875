//! Safeword: deterministic verification phrases for recipient pairs
//!
//! Two peers that know each other's recipient identifier (for example an age
//! X25519 public key) each derive the same 24-word BIP-39 phrase and compare
//! it out of band.
//!
//! ```rust
//! use safeword_core::generate;
//!
//! let mine = generate("age1alice", "age1bob").unwrap();
//! let theirs = generate("age1bob", "age1alice").unwrap();
//! assert_eq!(mine, theirs);
//! assert_eq!(mine.word_count(), 24);
//! ```

/// SHA-256 digest of a canonical pair
pub mod digest;
/// Error types
pub mod error;
/// Phrase derivation and verification
pub mod generator;
/// BIP-39 phrase encoding and parsing
pub mod phrase;
/// Canonical recipient ordering
pub mod recipients;
/// Flattened host response shape
pub mod response;

pub use digest::{PairDigest, DIGEST_LEN};
pub use error::{SafewordError, SafewordResult, ARITY_MESSAGE};
pub use generator::{generate, generate_phrase, pair_digest, verify};
pub use phrase::{Phrase, WORD_COUNT};
pub use recipients::RecipientPair;
pub use response::{respond, HostResponse};
