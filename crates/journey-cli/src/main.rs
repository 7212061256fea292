//! Journey CLI Application
//!
//! Command-line interface for generating deadline-driven project journeys.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use journey_core::SchedulerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let cli = Cli::new(scheduler, TerminalRenderer::new(!no_color));

    info!("Journey started");

    match command {
        Some(Commands::Project { command }) => cli.handle_project_command(command).await,
        Some(Commands::Generate(args)) => cli.generate(args).await,
        None => cli.list_projects().await,
    }
}
