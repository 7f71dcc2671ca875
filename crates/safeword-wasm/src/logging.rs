//! Browser console logging

use std::sync::Once;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

static LOGGER: Once = Once::new();

/// Route `tracing` events to the browser console
///
/// Only the first call installs a subscriber; the level of later calls is
/// ignored because the global default cannot be replaced.
pub fn init_logging(max_level: Level) {
    LOGGER.call_once(|| {
        let mut builder = WASMLayerConfigBuilder::new();
        builder.set_max_level(max_level);
        tracing_wasm::set_as_global_default_with_config(builder.build());
    });
}

/// Print Rust panics through `console.error`
#[cfg(feature = "console_error_panic_hook")]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Print Rust panics through `console.error`
#[cfg(not(feature = "console_error_panic_hook"))]
pub fn init_panic_hook() {
    // No-op without the panic hook feature
}
