// socialsan/src/commands/polyfill.rs
//! The `polyfill` command.

use anyhow::{Context, Result};
use socialsan_core::polyfill_social_media_fields;
use std::io::{self, Write};

use super::load_records;
use crate::cli::PolyfillCommand;

pub fn run_polyfill(cmd: PolyfillCommand) -> Result<()> {
    let records = load_records(&cmd.input)?;
    let fields = polyfill_social_media_fields(&records);
    let json = serde_json::to_string_pretty(&fields).context("Failed to serialize polyfilled fields")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{json}")?;
    Ok(())
}
