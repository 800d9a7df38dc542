//! Stride CLI application
//!
//! Command-line interface and MCP server for the Stride workout tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::tz::TimeZone;
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        time_zone,
        command,
    } = Args::parse();

    let time_zone = time_zone
        .map(|name| TimeZone::get(&name).with_context(|| format!("Unknown time zone '{name}'")))
        .transpose()?;

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_time_zone(time_zone)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stride started");

    match command {
        Some(Routine { command }) => {
            Cli::new(tracker, renderer)
                .handle_routine_command(command)
                .await
        }
        Some(Session { command }) => {
            Cli::new(tracker, renderer)
                .handle_session_command(command)
                .await
        }
        Some(Schedule { command }) => {
            Cli::new(tracker, renderer)
                .handle_schedule_command(command)
                .await
        }
        Some(Profile { command }) => {
            Cli::new(tracker, renderer)
                .handle_profile_command(command)
                .await
        }
        Some(Export(args)) => Cli::new(tracker, renderer).export(args).await,
        Some(Import(args)) => Cli::new(tracker, renderer).import(args).await,
        Some(Serve) => {
            info!("Starting Stride MCP server");
            run_stdio_server(StrideMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        Some(Overview) | None => Cli::new(tracker, renderer).overview().await,
    }
}
