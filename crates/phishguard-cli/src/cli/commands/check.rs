//! `phishguard check <url>` – train, then classify one URL.

use anyhow::{Context, Result};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predictor::{self, AppContext};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::display::{render_input_error, render_verdict};

pub fn run_check(cfg: &PhishguardConfig, dataset: &Path, url: &str, json: bool) -> Result<()> {
    check_to(&mut io::stdout().lock(), cfg, dataset, url, json)
}

fn check_to<W: Write>(
    out: &mut W,
    cfg: &PhishguardConfig,
    dataset: &Path,
    url: &str,
    json: bool,
) -> Result<()> {
    // Blank input never reaches training.
    if let Err(err) = predictor::validate_input(url) {
        render_input_error(out, &err)?;
        return Ok(());
    }

    let ctx = AppContext::train(cfg, dataset)?;
    let verdict = ctx.check(url)?;

    if json {
        let text = serde_json::to_string_pretty(&verdict.summary()).context("encode verdict")?;
        writeln!(out, "{text}")?;
    } else {
        render_verdict(out, &verdict)?;
    }
    Ok(())
}
