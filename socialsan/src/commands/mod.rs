// socialsan/src/commands/mod.rs
//! Subcommand implementations and the small I/O helpers they share.

pub mod migrate;
pub mod polyfill;
pub mod sanitize;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use socialsan_core::PartnerPlatform;
use std::fs;
use std::io;
use std::path::Path;

use crate::ui::output_format::{print_message, MessageKind};

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), MessageKind::Info, msg.as_ref(), stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), MessageKind::Success, msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), MessageKind::Error, msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), MessageKind::Warn, msg.as_ref(), stderr_supports_color);
}

/// Reads a JSON array of partner platform records.
pub fn load_records(path: &Path) -> Result<Vec<PartnerPlatform>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    let records: Vec<PartnerPlatform> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse record file {}", path.display()))?;
    debug!("Loaded {} records from {}.", records.len(), path.display());
    Ok(records)
}
