mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod demo_data;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::config::PlannerConfig;

// Not #[tokio::main]: the local UTC offset can only be read while the
// process is still single-threaded.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let offset = time_utils::local_offset();

    let command = cli.command.unwrap_or(Commands::Run);
    if command == Commands::ConfigPath {
        return print_config_path();
    }

    let config = PlannerConfig::load()?.with_overrides(PlannerConfig::env_api_url(), cli.api_url);
    init_logging()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(run(
        config,
        command == Commands::Demo,
        time_utils::Clock::Local(offset),
    ))
}

async fn run(config: PlannerConfig, demo: bool, clock: time_utils::Clock) -> Result<()> {
    tracing::info!(api_url = %config.api_url, demo, today = %clock.today(), "Starting planner");

    let client = ApiClient::new(&config.api_url)?;
    let mut app = App::new(clock, client.base_url().as_str());
    if demo {
        demo_data::seed(&mut app);
    }
    bootstrap::check_service(&mut app, &client).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Planner exited with an error");
    }
    res
}

fn print_config_path() -> Result<()> {
    let path = PlannerConfig::config_path()?;
    if !path.exists() {
        PlannerConfig::default().save()?;
    }
    println!("{}", path.display());
    Ok(())
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging() -> Result<()> {
    let path = PlannerConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "planner_tui=info".into()),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
