//! Subcommand handlers for the `patterns` binary.

pub mod config;
pub mod list;
pub mod run;
