//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definition the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::demos::DemoKind;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PATTERNS_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PATTERNS_BUILD_DATE"),
    ")"
);

/// Walk through classic design patterns on the console.
#[derive(Debug, Parser)]
#[command(name = "patterns", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this TOML file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // Defaults to `run` with every demo
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run demos in order (all of them when none are named)
    Run {
        /// Demos to run
        #[arg(value_enum)]
        demos: Vec<DemoKind>,

        /// Do not wait for Enter between demos
        #[arg(long)]
        no_pause: bool,
    },

    /// List available demos
    List,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the default config file location
    Path,
}
