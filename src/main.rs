//! A terminal dashboard for Brazilian regional/state hospital statistics.
//!
//! Run the binary to open the interactive dashboard.
//! Run with `--print` or `--json` to write the same figures to stdout.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::{dataset::Dataset, metric::Metric, report::DashboardSnapshot};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Regional/state hospital statistics dashboard")]
struct Cli {
    /// Metric to chart first: internacoes, obitos, taxa_mortalidade, valor_total.
    #[arg(long)]
    metric: Option<Metric>,

    /// Read the table from a CSV file instead of the built-in data.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Print cards and ranked charts as text and exit.
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print cards and chart specs as JSON and exit.
    #[arg(long)]
    json: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the dashboard or report output.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = match &cli.data {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("loading table from {}", path.display()))?,
        None => Dataset::builtin().context("parsing built-in table")?,
    };
    tracing::debug!(
        regions = dataset.regions().count(),
        states = dataset.states().count(),
        "dataset loaded"
    );

    let config_path = config::config_path();
    let user_config = AppConfig::load_from(&config_path);
    let metric = cli.metric.unwrap_or(user_config.default_metric);

    // ── non-interactive modes ─────────────────────────────────
    if cli.print || cli.json {
        let snapshot = DashboardSnapshot::new(&dataset, metric);
        if cli.json {
            println!("{}", snapshot.to_json()?);
        } else {
            print!("{}", snapshot.to_text());
        }
        return Ok(());
    }

    let mut state = AppState::new(dataset, metric, user_config);
    state.config_path = Some(config_path);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, wait for an event, apply it; until the user quits.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(state, k),
            Some(AppEvent::Resize(w, h)) => tracing::debug!("resize {w}x{h}"),
            Some(AppEvent::Tick) => {}
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
