//! Terminal rendering of training reports, verdicts and feature tables.

use phishguard_core::dataset::Label;
use phishguard_core::features::Evaluation;
use phishguard_core::predictor::{CheckError, Verdict};
use phishguard_core::trainer::TrainingReport;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn render_banner<W: Write>(out: &mut W, report: &TrainingReport) -> io::Result<()> {
    writeln!(out, "Phishing URL Detection Tool")?;
    writeln!(out, "Model Accuracy: {:.2}%", report.accuracy_percent())
}

pub fn render_report<W: Write>(out: &mut W, report: &TrainingReport) -> io::Result<()> {
    writeln!(out, "Model Accuracy: {:.2}%", report.accuracy_percent())?;
    writeln!(
        out,
        "  rows: {} ({} benign, {} phishing)",
        report.rows, report.benign, report.phishing
    )?;
    writeln!(
        out,
        "  split: {} train / {} test, {} correct",
        report.train_size, report.test_size, report.correct
    )?;
    if let Some(fp) = &report.fingerprint {
        writeln!(out, "  dataset sha256: {fp}")?;
    }
    Ok(())
}

pub fn render_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    let (status, bullet) = match verdict.label {
        Label::Phishing => ("⚠️", "🚨"),
        Label::Benign => ("✅", "✅"),
    };
    writeln!(out, "{status} {}", verdict.headline())?;
    writeln!(out, "Detailed Explanation:")?;
    for line in verdict.explanation() {
        writeln!(out, "  {bullet} {line}")?;
    }
    Ok(())
}

pub fn render_input_error<W: Write>(out: &mut W, err: &CheckError) -> io::Result<()> {
    writeln!(out, "Input Error: {err}")
}

pub fn render_features<W: Write>(out: &mut W, url: &str, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out, "URL: {url}")?;
    writeln!(out, "  {:<16}  {:>8}", "FEATURE", "VALUE")?;
    for (signal, value) in evaluation.features.named() {
        writeln!(out, "  {:<16}  {:>8}", signal.name(), value)?;
    }
    if evaluation.fired.is_empty() {
        writeln!(out, "No explanation rules fired.")?;
    } else {
        writeln!(out, "Rules fired:")?;
        for warning in evaluation.warnings() {
            writeln!(out, "  - {warning}")?;
        }
    }
    Ok(())
}

/// Reset the output area: clear the screen and show the banner again.
pub fn render_cleared<W: Write>(out: &mut W, report: &TrainingReport) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}")?;
    render_banner(out, report)
}
