//! CLI command handlers

pub mod commands;

pub use commands::{json, new_json, platform, show};

use crate::core::BatchOptions;
use crate::error::{ConvertError, ConvertResult};
use clap::ValueEnum;
use std::path::PathBuf;

/// Operations selected with `--command`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Convert a legacy SystemeHD *.xls (name, address columns) to *.json
    Json,
    /// Convert a new-layout SystemeHD *.xls (name, type code, instance) to *.json
    NewJson,
    /// Convert a SystemeHD *.xls to a Platform HD *_plat.xlsx (supports --batch)
    Platform,
    /// Show a config *.json (accepted, does nothing yet)
    Show,
}

/// One parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub filename: Option<PathBuf>,
    pub batch: Option<BatchOptions>,
    pub verbose: bool,
}

/// Dispatch an invocation to its command handler
pub fn run(invocation: Invocation) -> ConvertResult<()> {
    let Invocation {
        command,
        filename,
        batch,
        verbose,
    } = invocation;

    if batch.is_some() && command != Command::Platform {
        return Err(ConvertError::InvalidArguments(
            "--batch is only valid with the platform command".to_string(),
        ));
    }

    match command {
        Command::Json => json(filename, verbose),
        Command::NewJson => new_json(filename, verbose),
        Command::Platform => platform(filename, batch, verbose),
        Command::Show => show(filename),
    }
}
