//! Log setup for the rawlink binary.
//!
//! Logs go to `$XDG_STATE_HOME/rawlink/rawlink.log` so they never mix with the
//! shell's stdout. When that file cannot be opened, warnings and errors go to
//! stderr instead and the shell still starts.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "rawlink.log";

/// Where log lines ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

impl LogSink {
    /// Filter used when `RUST_LOG` is unset. Stderr shares the terminal with
    /// the prompt, so it only carries warnings.
    pub fn default_filter(&self) -> &'static str {
        match self {
            LogSink::File(_) => "info,rawlink=debug",
            LogSink::Stderr => "warn",
        }
    }
}

/// Install the global subscriber. Never fails: a missing or unwritable state
/// directory downgrades to stderr, and the reason is logged there.
pub fn init_logging() -> LogSink {
    match open_default_log() {
        Ok((path, file)) => {
            let sink = LogSink::File(path.clone());
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&sink))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::info!("rawlink logging initialized at {}", path.display());
            sink
        }
        Err(err) => {
            let sink = LogSink::Stderr;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&sink))
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            sink
        }
    }
}

fn env_filter(sink: &LogSink) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(sink.default_filter()))
}

fn open_default_log() -> Result<(PathBuf, File)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rawlink")
        .context("locating XDG state directory for rawlink")?;
    open_log_in(&xdg_dirs.get_state_home().join("rawlink"))
}

/// Open (append) the log file inside `dir`, creating the directory first.
pub fn open_log_in(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    Ok((path, file))
}
