//! CLI configuration file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    #[default]
    Text,
    /// The `{ "output": ... }` / `{ "error": ... }` object the browser bindings return
    Json,
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format when `--format` is not given
    pub format: OutputFormat,
    /// Log filter when neither `RUST_LOG` nor `--verbose` is set
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/// `<config dir>/safeword/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("safeword").join("config.toml"))
}

impl CliConfig {
    /// Parse TOML configuration
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Load configuration
    ///
    /// An explicitly passed path must exist. Without one, the default path is
    /// tried and a missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("In {}", path.display()))
    }
}
