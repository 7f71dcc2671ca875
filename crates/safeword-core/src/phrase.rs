//! BIP-39 phrase encoding and parsing
//!
//! Encoding always uses the English wordlist so that phrases produced here
//! match every other conformant BIP-39 implementation for the same entropy.

use crate::error::{SafewordError, SafewordResult};
use bip39::{Language, Mnemonic};
use std::fmt;
use std::str::FromStr;

/// Words in a phrase derived from a 256-bit digest
pub const WORD_COUNT: usize = 24;

/// A validated BIP-39 English mnemonic phrase
#[derive(Clone, PartialEq, Eq)]
pub struct Phrase {
    inner: Mnemonic,
    text: String,
}

impl Phrase {
    /// Encode entropy as a phrase
    ///
    /// Entropy must be 16, 20, 24, 28 or 32 bytes long. Any other length is
    /// rejected by the encoder and surfaces as [`SafewordError::Encoding`].
    pub fn encode(entropy: &[u8]) -> SafewordResult<Self> {
        let inner = Mnemonic::from_entropy(entropy)
            .map_err(|e| SafewordError::Encoding(e.to_string()))?;
        Ok(Self::from_mnemonic(inner))
    }

    /// Parse a phrase typed by a person
    ///
    /// Leading/trailing whitespace is dropped, case is folded and runs of
    /// whitespace between words are collapsed before the wordlist and
    /// checksum are checked.
    pub fn parse(input: &str) -> SafewordResult<Self> {
        let normalized = normalize(input);
        let inner = Mnemonic::parse_in_normalized(Language::English, &normalized)
            .map_err(|e| SafewordError::InvalidPhrase(e.to_string()))?;
        Ok(Self::from_mnemonic(inner))
    }

    fn from_mnemonic(inner: Mnemonic) -> Self {
        let text = inner.to_string();
        Self { inner, text }
    }

    /// The phrase as space-separated words
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate the words in order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split(' ')
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Entropy bytes encoded by this phrase (checksum removed)
    pub fn to_entropy(&self) -> Vec<u8> {
        self.inner.to_entropy()
    }
}

fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phrase")
            .field("word_count", &self.word_count())
            .field("phrase", &self.text)
            .finish()
    }
}

impl FromStr for Phrase {
    type Err = SafewordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.text
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
