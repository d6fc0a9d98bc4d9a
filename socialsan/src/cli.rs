// socialsan/src/cli.rs
//! This file defines the command-line interface (CLI) for the socialsan application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use socialsan_core::youtube::DEFAULT_API_BASE_URL;
use socialsan_core::{PlatformType, SocialsanError};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "socialsan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize partner social-media handles and websites",
    long_about = "SocialSan reduces user-supplied social-media identifiers (profile URLs, @handles, bare usernames) to canonical platform handles, validates website URLs, and runs the partner platform cleanup migration over a JSON record file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `socialsan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalizes identifiers for one platform.
    #[command(about = "Normalize identifiers for a platform, one result per line.")]
    Handle(HandleCommand),

    /// Normalizes website identifiers into absolute URLs.
    #[command(about = "Normalize website identifiers into absolute URLs, one result per line.")]
    Website(WebsiteCommand),

    /// Prints the flat per-platform identifier fields of a record file.
    #[command(about = "Print the flat website/youtube/twitter/... fields of a record file as JSON.")]
    Polyfill(PolyfillCommand),

    /// Runs the partner platform cleanup over a record file.
    #[command(about = "Normalize, delete or backfill the identifiers in a partner platform record file.")]
    Migrate(MigrateCommand),
}

/// Parses a platform tag such as `youtube` or `website`.
pub fn parse_platform(tag: &str) -> Result<PlatformType, String> {
    tag.parse().map_err(|e: SocialsanError| e.to_string())
}

/// Arguments for the `handle` command.
#[derive(Parser, Debug)]
pub struct HandleCommand {
    /// Platform whose rules apply (`website` uses the website sanitizer).
    #[arg(value_name = "PLATFORM", value_parser = parse_platform)]
    pub platform: PlatformType,

    /// Identifiers to normalize (reads lines from stdin if none are given).
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Exit with a non-zero code if any input is rejected.
    #[arg(long, help = "Exit with a non-zero code if any input could not be normalized.")]
    pub strict: bool,
}

/// Arguments for the `website` command.
#[derive(Parser, Debug)]
pub struct WebsiteCommand {
    /// Websites to normalize (reads lines from stdin if none are given).
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Exit with a non-zero code if any input is rejected.
    #[arg(long, help = "Exit with a non-zero code if any input could not be normalized.")]
    pub strict: bool,
}

/// Arguments for the `polyfill` command.
#[derive(Parser, Debug)]
pub struct PolyfillCommand {
    /// JSON array of partner platform records.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read records from a JSON file.")]
    pub input: PathBuf,
}

/// Arguments for the `migrate` command.
#[derive(Parser, Debug)]
pub struct MigrateCommand {
    /// JSON array of partner platform records.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read records from a JSON file.")]
    pub input: PathBuf,

    /// Write migrated records to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write migrated records to a file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Print the planned actions instead of the migrated records.
    #[arg(long = "dry-run", help = "Print the planned action for each record without writing records.")]
    pub dry_run: bool,

    /// API key used to resolve `/channel/<id>` YouTube identifiers.
    #[arg(
        long = "youtube-api-key",
        env = "YOUTUBE_API_KEY",
        hide_env_values = true,
        value_name = "KEY",
        help = "YouTube Data API key; channel URLs are skipped without one."
    )]
    pub youtube_api_key: Option<String>,

    /// Base URL of the YouTube Data API.
    #[arg(long = "youtube-base-url", value_name = "URL", default_value = DEFAULT_API_BASE_URL, hide = true)]
    pub youtube_base_url: String,

    /// Suppress the summary table.
    #[arg(long = "no-summary", help = "Suppress the migration summary.")]
    pub no_summary: bool,
}
