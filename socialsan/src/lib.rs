// socialsan/src/lib.rs
//! # SocialSan CLI
//!
//! Command-line front end for `socialsan-core`: ad-hoc handle and website
//! normalization, the flat polyfill view of a record file, and the partner
//! platform migration run.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
