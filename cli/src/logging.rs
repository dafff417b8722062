use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    }
}

fn env_filter(verbose: u8, quiet: u8) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for(verbose, quiet)))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))
}

/// Logs to stderr. Used by the non-interactive commands.
pub fn init_stderr(verbose: u8, quiet: u8) -> Result<()> {
    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, quiet)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

/// Logs to a file so the TUI's alternate screen stays clean.
pub fn init_file(path: &Path, verbose: u8, quiet: u8) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, quiet)?)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
