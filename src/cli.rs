// src/cli.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quick_task_tracker")]
#[command(about = "A single-window personal task tracker", long_about = None)]
pub struct Cli {
    /// Tracing filter directive, e.g. `info` or `quick_task_tracker=debug`
    #[arg(long, env = "QUICK_TASK_TRACKER_LOG", default_value = "info")]
    pub log_level: String,
}

pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
