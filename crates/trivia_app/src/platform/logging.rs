//! Platform logging initialization for the trivia app.
//!
//! File output goes to `./trivia.log` in the current working directory, which
//! keeps log lines out of the rendered question list.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./trivia.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum LogDestination {
    /// Write to ./trivia.log in current directory.
    #[default]
    File,
    /// Write to terminal (stderr for errors, stdout otherwise).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => {
            if let Some(file_logger) = create_file_logger(level, config) {
                vec![file_logger]
            } else {
                return;
            }
        }
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
