// socialsan/src/ui/mod.rs
//! Terminal output helpers: coloured status messages and the migration summary table.

pub mod output_format;
pub mod summary;
