// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use iced::Application;
use tracing::info;

use quick_task_tracker::cli::{init_tracing, Cli};
use quick_task_tracker::{QuickTaskTracker, TaskStore};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut settings = iced::Settings::with_flags(TaskStore::new());
    settings.window.size = (800, 600);

    info!("opening task tracker window");
    QuickTaskTracker::run(settings).context("run task tracker window")?;
    Ok(())
}
