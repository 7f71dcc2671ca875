//! Options accepted by `init`

use crate::error::{WasmError, WasmResult};
use serde::Deserialize;
use tracing::Level;

/// Host-supplied configuration for the bindings
///
/// Every field is optional on the JavaScript side; `init()` with no
/// argument uses the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WasmConfig {
    /// Maximum level forwarded to the browser console
    pub log_level: String,
    /// Install the panic hook that prints Rust panics to the console
    pub panic_hook: bool,
}

impl Default for WasmConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            panic_hook: true,
        }
    }
}

/// Validated `init` settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum console level
    pub level: Level,
    /// Whether to install the panic hook
    pub panic_hook: bool,
}

impl WasmConfig {
    /// Validate every option
    pub fn resolve(&self) -> WasmResult<Settings> {
        Ok(Settings {
            level: self.level()?,
            panic_hook: self.panic_hook,
        })
    }

    /// Parse the configured level
    pub fn level(&self) -> WasmResult<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| WasmError::Config(format!("unknown log level: {}", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(WasmConfig::default().level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = WasmConfig {
            log_level: "DEBUG".to_string(),
            ..WasmConfig::default()
        };
        assert_eq!(config.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_resolve_keeps_panic_hook_flag() {
        let config = WasmConfig {
            log_level: "warn".to_string(),
            panic_hook: false,
        };
        assert_eq!(
            config.resolve().unwrap(),
            Settings {
                level: Level::WARN,
                panic_hook: false,
            }
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_level() {
        let config = WasmConfig {
            log_level: "chatty".to_string(),
            panic_hook: true,
        };
        assert!(matches!(config.resolve(), Err(WasmError::Config(_))));
    }

    #[test]
    fn test_unknown_level_is_config_error() {
        let config = WasmConfig {
            log_level: "chatty".to_string(),
            ..WasmConfig::default()
        };
        assert!(matches!(config.level(), Err(WasmError::Config(_))));
    }
}
