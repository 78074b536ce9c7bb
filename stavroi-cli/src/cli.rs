//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Look up upcoming duties from the unit roster.
#[derive(Debug, Parser)]
#[command(name = "stavroi-cli", version)]
pub struct Cli {
    /// Surname to look up (any casing, Greek or Latin script). Prompts
    /// interactively when omitted.
    pub surname: Option<String>,

    /// Path to the roster spreadsheet, overriding STAVROI_LOCATION.
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Path to the duty code table, overriding DUTIES_LOCATION.
    #[arg(long, value_name = "FILE")]
    pub duties: Option<PathBuf>,
}
