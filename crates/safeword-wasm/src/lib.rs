//! Browser bindings for safeword
//!
//! Exposes phrase derivation to JavaScript. Derivation results come back as a
//! plain object holding either `output` or `error`; these functions never
//! throw for bad recipients or phrases.
//!
//! ```js
//! import init_wasm, { init, mnemonic } from "safeword-wasm";
//!
//! await init_wasm();
//! init({ logLevel: "debug" });
//! const { output, error } = mnemonic(myPublicKey, peerPublicKey);
//! ```

/// Host argument conversion
pub mod args;
/// `init` options
pub mod config;
/// Binding-layer errors
pub mod error;
/// Console logging setup
pub mod logging;

use args::host_text;
use config::WasmConfig;
use error::WasmError;
use safeword_core::{respond, verify, HostResponse};
use serde::Serialize;
use tracing::{error, info};
use wasm_bindgen::prelude::*;

/// Message returned when `verifyMnemonic` is missing an argument
pub const VERIFY_ARITY_MESSAGE: &str =
    "invalid arguments. expected: recipient1, recipient2, phrase";

/// Arguments the host actually supplied; `undefined` counts as absent
fn supplied(values: &[JsValue]) -> Vec<String> {
    values
        .iter()
        .filter(|value| !value.is_undefined())
        .map(host_text)
        .collect()
}

fn to_js<T: Serialize>(response: &HostResponse<T>) -> JsValue {
    serde_wasm_bindgen::to_value(response).unwrap_or_else(|err| {
        error!(%err, "failed to convert response");
        let object = js_sys::Object::new();
        if let Err(set_err) = js_sys::Reflect::set(
            &object,
            &JsValue::from_str("error"),
            &JsValue::from_str(&err.to_string()),
        ) {
            error!(err = %WasmError::from(set_err), "failed to attach error to response");
        }
        object.into()
    })
}

/// Configure logging and the panic hook
///
/// `options` may be omitted. Throws only when the options object is malformed.
#[wasm_bindgen]
pub fn init(options: JsValue) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        WasmConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<WasmConfig>(options).map_err(WasmError::from)?
    };

    // Reject bad options before any global state is touched
    let settings = config.resolve()?;

    if settings.panic_hook {
        logging::init_panic_hook();
    }
    logging::init_logging(settings.level);

    info!(log_level = %settings.level, "safeword bindings initialized");
    Ok(())
}

/// Derive the verification phrase for two recipients
///
/// Returns `{ output }` with 24 space-separated words, or `{ error }`.
#[wasm_bindgen]
pub fn mnemonic(recipient1: JsValue, recipient2: JsValue) -> JsValue {
    let args = supplied(&[recipient1, recipient2]);
    to_js(&respond(args.as_slice()))
}

/// Variable-arity form of [`mnemonic`] for hosts that forward `arguments`
///
/// Every element counts, `undefined` included, so only a two-element array
/// succeeds.
#[wasm_bindgen(js_name = mnemonicFromArgs)]
pub fn mnemonic_from_args(args: js_sys::Array) -> JsValue {
    let args: Vec<String> = args.iter().map(|value| host_text(&value)).collect();
    to_js(&respond(args.as_slice()))
}

/// Check a phrase against two recipients
///
/// Returns `{ output: true | false }`, or `{ error }` when an argument is
/// missing or the phrase is not a BIP-39 mnemonic.
#[wasm_bindgen(js_name = verifyMnemonic)]
pub fn verify_mnemonic(recipient1: JsValue, recipient2: JsValue, phrase: JsValue) -> JsValue {
    let response = match supplied(&[recipient1, recipient2, phrase]).as_slice() {
        [a, b, candidate] => HostResponse::from_result(verify(a, b, candidate)),
        _ => HostResponse::failure(VERIFY_ARITY_MESSAGE),
    };
    to_js(&response)
}
