//! Command handlers
//!
//! Handlers write to any `io::Write` so the binary can pass stdout and tests
//! can pass a buffer.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use safeword_core::{generate_phrase, pair_digest, respond, verify, HostResponse};
use serde::Serialize;
use std::io::Write;
use tracing::info;

fn write_json<T: Serialize>(out: &mut impl Write, response: &HostResponse<T>) -> Result<()> {
    let json = serde_json::to_string(response).context("Failed to serialize response")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Print the phrase for two recipients
///
/// In JSON mode the derivation error, if any, is part of the printed object
/// rather than a failure of the command.
pub fn phrase(
    recipient1: &str,
    recipient2: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let phrase = generate_phrase(recipient1, recipient2)?;
            writeln!(out, "{phrase}")?;
        }
        OutputFormat::Json => write_json(out, &respond(&[recipient1, recipient2]))?,
    }
    Ok(())
}

/// Compare a phrase against two recipients and report whether it matches
pub fn verify_phrase(
    recipient1: &str,
    recipient2: &str,
    words: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let candidate = words.join(" ");
    let matches = verify(recipient1, recipient2, &candidate)?;
    info!(matches, "phrase verification finished");

    match format {
        OutputFormat::Text => writeln!(out, "{}", if matches { "match" } else { "mismatch" })?,
        OutputFormat::Json => write_json(out, &HostResponse::success(matches))?,
    }
    Ok(matches)
}

/// Print the hex SHA-256 digest of the canonical pair
pub fn digest(
    recipient1: &str,
    recipient2: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let digest = pair_digest(recipient1, recipient2);
    match format {
        OutputFormat::Text => writeln!(out, "{digest}")?,
        OutputFormat::Json => write_json(out, &HostResponse::success(digest.to_hex()))?,
    }
    Ok(())
}
