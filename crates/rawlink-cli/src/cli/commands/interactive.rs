//! `rawlink` with no URLs: the interactive shell.

use anyhow::Result;
use rawlink_core::config::ShellConfig;
use std::io;

use crate::shell::{interrupt, EditorSource, Shell};

pub fn run_interactive(cfg: &ShellConfig) -> Result<()> {
    if let Err(err) = interrupt::spawn_watcher(|| {
        interrupt::goodbye_and_exit();
    }) {
        tracing::warn!("Ctrl-C handler unavailable: {}", err);
    }

    let source = EditorSource::new(cfg)?;
    tracing::info!("starting interactive shell (history={})", cfg.history);
    let exit = Shell::new(source, io::stdout()).run();
    tracing::debug!("interactive shell exited: {:?}", exit);
    Ok(())
}
