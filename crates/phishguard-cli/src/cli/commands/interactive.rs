//! `phishguard interactive` – train once, then check URLs from stdin.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::AppContext;
use std::io;
use std::path::Path;

use crate::cli::session::run_session;

pub fn run_interactive(cfg: &PhishguardConfig, dataset: &Path) -> Result<()> {
    let ctx = AppContext::train(cfg, dataset)?;
    let checked = run_session(&ctx, io::stdin().lock(), &mut io::stdout().lock())?;
    tracing::info!("interactive session ended after {checked} checks");
    Ok(())
}
