//! Subcommand implementations

pub mod completions;
pub mod config;
pub mod create;
pub mod list;
