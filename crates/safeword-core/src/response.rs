//! Host-facing response shape
//!
//! Hosts receive a flat object with at most one of `output` or `error`
//! populated. Inside Rust the generator returns a `Result`; this module is
//! where that result is flattened.

use crate::error::SafewordError;
use crate::generator::generate_phrase;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Flattened success/failure object handed back to hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostResponse<T> {
    /// Present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<T>,
    /// Present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> HostResponse<T> {
    /// A success response
    pub fn success(output: T) -> Self {
        Self {
            output: Some(output),
            error: None,
        }
    }

    /// A failure response carrying the error's display text
    pub fn failure(error: impl Display) -> Self {
        Self {
            output: None,
            error: Some(error.to_string()),
        }
    }

    /// Flatten a `Result`
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(err) => Self::failure(err),
        }
    }

    /// Whether the response carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Convert back into a `Result`, treating a missing output as an error
    pub fn into_result(self) -> Result<T, String> {
        match (self.output, self.error) {
            (_, Some(error)) => Err(error),
            (Some(output), None) => Ok(output),
            (None, None) => Err("response carried neither output nor error".to_string()),
        }
    }
}

/// Run the generator over positional host arguments
///
/// Exactly two arguments are required; any other count yields the fixed
/// arity message and no output.
pub fn respond<S: AsRef<str>>(args: &[S]) -> HostResponse<String> {
    match args {
        [a, b] => HostResponse::from_result(generate_phrase(a.as_ref(), b.as_ref())),
        _ => HostResponse::failure(SafewordError::arity(args.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ARITY_MESSAGE;

    #[test]
    fn test_two_arguments_succeed() {
        let response = respond(&["alice", "bob"]);
        assert!(!response.is_error());
        assert_eq!(
            response.output.as_deref(),
            Some(generate_phrase("alice", "bob").unwrap().as_str())
        );
    }

    #[test]
    fn test_wrong_arity_fails() {
        let none: [&str; 0] = [];
        for response in [
            respond(&none),
            respond(&["alice"]),
            respond(&["alice", "bob", "carol"]),
        ] {
            assert_eq!(response.output, None);
            assert_eq!(response.error.as_deref(), Some(ARITY_MESSAGE));
        }
    }

    #[test]
    fn test_success_serializes_output_only() {
        let json = serde_json::to_value(HostResponse::success("words".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "output": "words" }));
    }

    #[test]
    fn test_failure_serializes_error_only() {
        let json = serde_json::to_value(respond(&["only-one"])).unwrap();
        assert_eq!(json, serde_json::json!({ "error": ARITY_MESSAGE }));
    }

    #[test]
    fn test_from_result_uses_error_display() {
        let response: HostResponse<String> =
            HostResponse::from_result(Err(SafewordError::Encoding("bad length".to_string())));
        assert_eq!(
            response.error.as_deref(),
            Some("bad length")
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(HostResponse::success(1u8).into_result(), Ok(1));
        assert_eq!(
            HostResponse::<u8>::failure("boom").into_result(),
            Err("boom".to_string())
        );
        let empty = HostResponse::<u8> {
            output: None,
            error: None,
        };
        assert!(empty.into_result().is_err());
    }
}
