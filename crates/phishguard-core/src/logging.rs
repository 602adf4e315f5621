//! tracing setup. The CLI logs to `phishguard.log` in the XDG state
//! directory and drops to stderr if that file cannot be opened.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,phishguard=debug,phishguard_core=debug";
const LOG_FILE: &str = "phishguard.log";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let state_dir = xdg::BaseDirectories::with_prefix("phishguard")
        .context("resolve XDG directories")?
        .get_state_home();
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("create {}", state_dir.display()))?;

    let path = state_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    Ok((file, path))
}

/// Send log events to the state-dir log file. An error leaves no subscriber
/// installed, so the caller can still use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let (file, path) = open_log_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging to {}", path.display());
    Ok(())
}

pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
