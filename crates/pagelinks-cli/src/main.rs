//! pagelinks CLI
//!
//! Main entry point for the `pagelinks` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;
mod commands;
mod error;
mod output;

use cli::Cli;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    match cli.run() {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("error: {e}");
            e.exit_code().into()
        }
    }
}

fn init_tracing(cli: &Cli) {
    use pagelinks_common_log::{LogConfig, LogLevel};

    let config = LogConfig::from_env();
    let config = match cli.verbose {
        0 if cli.quiet => config.with_level(LogLevel::Error),
        0 => config,
        1 => config.with_level(LogLevel::Info),
        2 => config.with_level(LogLevel::Debug),
        _ => config.with_level(LogLevel::Trace),
    };

    if let Err(e) = pagelinks_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
