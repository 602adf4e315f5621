//! CLI for the phishguard phishing URL checker.

mod commands;
mod display;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishguard_core::config::{self, PhishguardConfig};
use std::path::PathBuf;

use commands::{run_check, run_features, run_interactive, run_train};

/// Top-level CLI for phishguard.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "phishguard: flag phishing URLs from lexical features", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Train on the dataset and print holdout accuracy.
    Train {
        /// Labeled CSV with URL and Label columns (overrides config).
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,
    },

    /// Train, then classify a single URL.
    Check {
        /// URL to check.
        url: String,

        /// Labeled CSV with URL and Label columns (overrides config).
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,

        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the lexical features of a URL without training.
    Features {
        /// URL to inspect.
        url: String,
    },

    /// Train, then check URLs typed on stdin until EOF or `:quit`.
    Interactive {
        /// Labeled CSV with URL and Label columns (overrides config).
        #[arg(long, value_name = "PATH")]
        dataset: Option<PathBuf>,
    },
}

/// Dataset path from the command line, else from config.
fn dataset_path(cfg: &PhishguardConfig, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| cfg.dataset_path.clone())
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Train { dataset } => run_train(&cfg, &dataset_path(&cfg, dataset))?,
            CliCommand::Check { url, dataset, json } => {
                run_check(&cfg, &dataset_path(&cfg, dataset), &url, json)?
            }
            CliCommand::Features { url } => run_features(&cfg, &url)?,
            CliCommand::Interactive { dataset } => {
                run_interactive(&cfg, &dataset_path(&cfg, dataset))?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
