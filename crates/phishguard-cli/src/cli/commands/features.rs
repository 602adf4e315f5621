//! `phishguard features <url>` – show the lexical features of a URL.

use anyhow::Result;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::features;
use std::io;

use crate::cli::display::render_features;

pub fn run_features(cfg: &PhishguardConfig, url: &str) -> Result<()> {
    let evaluation = features::evaluate(url, &cfg.signals);
    render_features(&mut io::stdout().lock(), url, &evaluation)?;
    Ok(())
}
