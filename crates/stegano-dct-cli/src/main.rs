use clap::Parser;
use stegano_dct::DctError;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, DctError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = args.config()?;

    match args.command {
        Commands::Hide(hide) => hide.run(&config),
        Commands::Unveil(unveil) => unveil.run(&config),
        Commands::Evaluate(evaluate) => evaluate.run(&config),
        Commands::Resize(resize) => resize.run(),
    }
}
