// socialsan/src/commands/migrate.rs
//! The `migrate` command: runs the partner platform cleanup over a record file.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{info, warn};
use socialsan_core::{apply_plan, ChannelResolver, MigrationOutcome, YoutubeClient};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::{info_msg, load_records, success_msg, warn_msg};
use crate::cli::MigrateCommand;
use crate::ui::summary;

fn build_client(cmd: &MigrateCommand) -> Option<YoutubeClient> {
    let key = cmd.youtube_api_key.as_deref().map(str::trim).filter(|key| !key.is_empty());
    match key {
        Some(key) => Some(YoutubeClient::with_base_url(key, cmd.youtube_base_url.as_str())),
        None => {
            warn!("YOUTUBE_API_KEY is not set; YouTube channel identifiers will be skipped.");
            None
        }
    }
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize migration output")?;
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info_msg(format!("Wrote migration output to {}", path.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}

fn report_outcome(outcome: &MigrationOutcome, no_summary: bool) -> Result<()> {
    if !no_summary {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&outcome.report, &mut io::stderr(), stderr_supports_color)?;
    }
    if outcome.report.skipped > 0 {
        warn_msg(format!("{} record(s) were skipped and left untouched.", outcome.report.skipped));
    }
    Ok(())
}

pub fn run_migrate(cmd: MigrateCommand) -> Result<()> {
    let records = load_records(&cmd.input)?;
    info!("Starting migration of {} records from {}.", records.len(), cmd.input.display());

    let client = build_client(&cmd);
    let resolver = client.as_ref().map(|client| client as &dyn ChannelResolver);
    let outcome = apply_plan(records, resolver);

    if cmd.dry_run {
        write_json(&outcome.entries, cmd.output.as_deref())?;
    } else {
        write_json(&outcome.records, cmd.output.as_deref())?;
        success_msg(format!(
            "Migrated {} records: {} updated, {} deleted.",
            outcome.report.examined, outcome.report.updated, outcome.report.deleted
        ));
    }

    report_outcome(&outcome, cmd.no_summary)
}
