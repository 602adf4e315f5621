//! `phishguard train` – fit the model and report holdout accuracy.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::AppContext;
use std::io;
use std::path::Path;

use crate::cli::display::render_report;

pub fn run_train(cfg: &PhishguardConfig, dataset: &Path) -> Result<()> {
    let ctx = AppContext::train(cfg, dataset)?;
    render_report(&mut io::stdout().lock(), ctx.report())?;
    Ok(())
}
