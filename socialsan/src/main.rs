// socialsan/src/main.rs
//! SocialSan entry point.
//!
//! Loads `.env`, parses arguments, initializes logging and dispatches to the
//! selected subcommand. A failed command prints its error chain and exits 1.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use socialsan::cli::{Cli, Commands};
use socialsan::commands::{self, migrate, polyfill, sanitize};
use socialsan::logger;
use std::process;

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Handle(cmd) => sanitize::run_handle(cmd),
        Commands::Website(cmd) => sanitize::run_website(cmd),
        Commands::Polyfill(cmd) => polyfill::run_polyfill(cmd),
        Commands::Migrate(cmd) => migrate::run_migrate(cmd),
    }
}

fn main() {
    // `.env` may carry YOUTUBE_API_KEY; it must be loaded before clap reads the env.
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    if let Err(e) = run(args.command) {
        commands::error_msg(format!("{e:#}"));
        process::exit(1);
    }
}
