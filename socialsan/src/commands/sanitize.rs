// socialsan/src/commands/sanitize.rs
//! The `handle` and `website` commands.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use socialsan_core::{sanitize_identifier, PlatformType};
use std::io::{self, BufRead, Write};

use crate::cli::{HandleCommand, WebsiteCommand};

/// Returns `inputs`, or every line of stdin when `inputs` is empty.
fn collect_inputs<R: BufRead>(inputs: Vec<String>, stdin: R) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }
    stdin
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read identifiers from stdin")
}

/// Writes one result line per input (empty for rejected inputs) and returns
/// the number of rejected inputs.
pub fn write_sanitized<W: Write>(writer: &mut W, platform: PlatformType, inputs: &[String]) -> Result<usize> {
    let mut rejected = 0;
    for input in inputs {
        match sanitize_identifier(Some(input), platform) {
            Some(value) => {
                debug!("{} '{}' -> '{}'", platform, input, value);
                writeln!(writer, "{value}")?;
            }
            None => {
                info!("Could not normalize {} identifier: {}", platform, input);
                rejected += 1;
                writeln!(writer)?;
            }
        }
    }
    Ok(rejected)
}

fn run(platform: PlatformType, inputs: Vec<String>, strict: bool) -> Result<()> {
    let inputs = collect_inputs(inputs, io::stdin().lock())?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let rejected = write_sanitized(&mut writer, platform, &inputs)?;
    writer.flush()?;

    if strict && rejected > 0 {
        bail!("{} of {} input(s) could not be normalized", rejected, inputs.len());
    }
    Ok(())
}

pub fn run_handle(cmd: HandleCommand) -> Result<()> {
    run(cmd.platform, cmd.inputs, cmd.strict)
}

pub fn run_website(cmd: WebsiteCommand) -> Result<()> {
    run(PlatformType::Website, cmd.inputs, cmd.strict)
}
