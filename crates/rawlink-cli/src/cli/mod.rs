//! CLI for rawlink.

mod commands;

use anyhow::Result;
use clap::Parser;
use rawlink_core::config::{self, RawlinkConfig};
use std::path::PathBuf;

use commands::{run_convert, run_interactive};

/// Turn GitHub browser links into raw.githubusercontent.com links.
#[derive(Debug, Parser)]
#[command(name = "rawlink", version)]
#[command(about = "Convert GitHub browser links into raw GitHub links", long_about = None)]
pub struct Cli {
    /// GitHub browser URLs to convert. Starts the interactive shell when omitted.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read configuration from this TOML file instead of ~/.config/rawlink/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not keep line-editing history for this session.
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if self.urls.is_empty() {
            run_interactive(&cfg.shell)
        } else {
            run_convert(&self.urls)
        }
    }

    /// Config from `--config` (must exist and parse) or the XDG default, which
    /// falls back to built-in defaults, with command-line overrides applied.
    fn load_config(&self) -> Result<RawlinkConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default(),
        };
        if self.no_history {
            cfg.shell.history = false;
        }
        Ok(cfg)
    }
}
