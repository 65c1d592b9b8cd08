use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use stegafile_core::StegaError;
use thiserror::Error;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Stega(#[from] StegaError),
}

pub type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    if let Some(reason) = args.ignored_type() {
        warn!("{reason}");
        eprintln!("Warning: {reason}");
    }

    let result = match &args.command {
        Commands::Hide(hide) => hide.run(args.codec_options(None)),
        Commands::Unveil(unveil) => unveil.run(args.codec_options(unveil.payload_type)),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(args.codec_options(None)),
        Commands::Capacity(capacity) => capacity.run(args.codec_options(None)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
