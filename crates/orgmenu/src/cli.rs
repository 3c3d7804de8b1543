//! Command-line interface definitions for orgmenu.

use std::{env, path::PathBuf};

use clap::Parser;

/// Command-line interface for the `orgmenu` binary.
#[derive(Parser, Debug)]
#[command(
    name = "orgmenu",
    about = "Generate the Org menu and key mapping script",
    version
)]
pub struct Cli {
    /// Write the generated script to this path instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Merge user-defined entries from a RON file under Org.Custom.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set global log level to debug
    #[arg(long, conflicts_with = "log_level")]
    pub debug: bool,

    /// Set a single global log level (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Filter spec for the tracing subscriber, with `RUST_LOG` as fallback.
    pub fn log_spec(&self) -> String {
        if self.debug {
            return "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            return level.clone();
        }
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }
}
