//! Canonical ordering of recipient pairs

/// Two recipient identifiers stored in ascending byte order
///
/// The pair is unordered from the caller's point of view: `new("b", "a")` and
/// `new("a", "b")` produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipientPair {
    low: String,
    high: String,
}

impl RecipientPair {
    /// Create a canonical pair from two recipients in any order
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        // `str` ordering is lexicographic over UTF-8 bytes
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The recipient that sorts first
    pub fn first(&self) -> &str {
        &self.low
    }

    /// The recipient that sorts second
    pub fn second(&self) -> &str {
        &self.high
    }

    /// Both recipients joined with no separator, in canonical order
    pub fn concatenated(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.low.len() + self.high.len());
        buf.extend_from_slice(self.low.as_bytes());
        buf.extend_from_slice(self.high.as_bytes());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_sorted() {
        let pair = RecipientPair::new("bob", "alice");
        assert_eq!(pair.first(), "alice");
        assert_eq!(pair.second(), "bob");
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(
            RecipientPair::new("alice", "bob"),
            RecipientPair::new("bob", "alice")
        );
    }

    #[test]
    fn test_byte_order_puts_uppercase_first() {
        // 'B' (0x42) sorts before 'a' (0x61)
        let pair = RecipientPair::new("alice", "Bob");
        assert_eq!(pair.concatenated(), b"Bobalice".to_vec());
    }

    #[test]
    fn test_concatenation_has_no_separator() {
        let pair = RecipientPair::new("alice", "bob");
        assert_eq!(pair.concatenated(), b"alicebob".to_vec());
    }

    #[test]
    fn test_empty_recipients() {
        let pair = RecipientPair::new("", "");
        assert!(pair.concatenated().is_empty());
    }

    #[test]
    fn test_identical_recipients() {
        let pair = RecipientPair::new("age1abc", "age1abc");
        assert_eq!(pair.concatenated(), b"age1abcage1abc".to_vec());
    }
}
