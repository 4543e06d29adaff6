use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;
use stegano_dct::Config;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// JSON file with alpha, p, q, method and encrypt, flags take precedence
    #[arg(long, value_name = "config file", global = true)]
    pub config: Option<PathBuf>,

    /// Embedding strength within (0, 1]
    #[arg(short, long, value_name = "alpha", global = true)]
    pub alpha: Option<f64>,

    /// Coefficient selection strategy: center, high_freq, scattered, zigzag or frequency_weighted
    #[arg(short, long, value_name = "strategy", global = true)]
    pub method: Option<String>,

    /// Row stride or band numerator, cipher exponent with --encrypt
    #[arg(short = 'p', value_name = "p", global = true)]
    pub p: Option<usize>,

    /// Column stride or band denominator, cipher modulus with --encrypt
    #[arg(short = 'q', value_name = "q", global = true)]
    pub q: Option<usize>,

    /// Scramble secret pixels with v^p mod q before hiding
    #[arg(long, global = true)]
    pub encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Evaluate(evaluate::EvaluateArgs),
    Resize(resize::ResizeArgs),
}

impl CliArgs {
    /// The config file, or the defaults, with command line overrides applied
    pub fn config(&self) -> CliResult<Config> {
        let mut config = match &self.config {
            Some(file) => Config::load(file)?,
            None => Config::default(),
        };

        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(method) = &self.method {
            config.method = method.clone();
        }
        if let Some(p) = self.p {
            config.p = p;
        }
        if let Some(q) = self.q {
            config.q = q;
        }
        if self.encrypt {
            config.encrypt = true;
        }
        debug!("using {config:?}");

        Ok(config)
    }
}
