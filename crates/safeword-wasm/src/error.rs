//! Error handling for the browser bindings

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Errors raised by the binding layer itself
///
/// Phrase derivation failures never use this type; they are flattened into
/// the `{ error }` response object instead of being thrown.
#[derive(Error, Debug)]
pub enum WasmError {
    /// Invalid `init` options
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversion between Rust values and JavaScript values failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_wasm_bindgen::Error),

    /// A JavaScript call threw, e.g. `Reflect.set` while building a response
    #[error("JavaScript error: {0}")]
    JavaScript(String),
}

impl From<JsValue> for WasmError {
    fn from(thrown: JsValue) -> Self {
        // Thrown values are usually `Error` objects, occasionally bare strings
        let message = thrown
            .as_string()
            .or_else(|| {
                thrown
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        WasmError::JavaScript(message)
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type for binding operations
pub type WasmResult<T> = Result<T, WasmError>;
