use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Browse the trivia question list from a terminal.
#[derive(Debug, Parser)]
#[command(name = "trivia", version, about)]
pub struct Args {
    /// RON config file; defaults to ./trivia.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API root, overriding the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where log output goes, overriding the config file.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}
