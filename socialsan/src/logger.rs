// socialsan/src/logger.rs
//! Logger initialization for the `socialsan` binary and its tests.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Filter used when neither a level override nor `RUST_LOG` is given.
const DEFAULT_FILTER: &str = "warn,socialsan=info,socialsan_core=info";

/// Initializes `env_logger`, writing to stderr.
///
/// `Some(level)` forces that level for every target and ignores `RUST_LOG`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
    };
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
