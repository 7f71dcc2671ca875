//! Error types for phrase generation and verification

use thiserror::Error;

/// Message returned to hosts that call the generator with the wrong number of arguments.
pub const ARITY_MESSAGE: &str = "invalid arguments. expected: recipient1, recipient2";

/// Result type for safeword operations
pub type SafewordResult<T> = Result<T, SafewordError>;

/// Errors that can occur while deriving or checking a phrase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafewordError {
    /// The caller supplied something other than exactly two recipients
    #[error("invalid arguments. expected: recipient1, recipient2")]
    Arity {
        /// Number of arguments actually received
        received: usize,
    },

    /// The mnemonic encoder rejected the entropy; displays the encoder's message
    #[error("{0}")]
    Encoding(String),

    /// A candidate phrase is not a valid BIP-39 English mnemonic
    #[error("invalid mnemonic phrase: {0}")]
    InvalidPhrase(String),
}

impl SafewordError {
    /// Build an arity error for the given argument count
    pub fn arity(received: usize) -> Self {
        SafewordError::Arity { received }
    }
}
