use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_minimax::ai::MinimaxAgent;
use connect_four_minimax::config::{AppConfig, LoggingConfig, UiMode};
use connect_four_minimax::game::GameOutcome;
use connect_four_minimax::ui::{self, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{prelude::*, reload, EnvFilter, Registry};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed the opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Use the line-oriented text interface instead of the TUI
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subscriber goes up first so config loading can log; the filter is
    // swapped for the configured one afterwards
    let filter_handle = init_tracing();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    filter_handle
        .reload(env_filter(&config.logging.filter))
        .context("applying logging filter")?;

    if cli.seed.is_some() {
        config.opponent.seed = cli.seed;
    }
    if cli.text {
        config.ui.mode = UiMode::Text;
    }

    let agent = match config.opponent.seed {
        Some(seed) => MinimaxAgent::seeded(seed),
        None => MinimaxAgent::new(),
    };
    info!(seed = ?config.opponent.seed, mode = ?config.ui.mode, "starting");

    match config.ui.mode {
        UiMode::Text => run_text(agent, config.opponent.announce_random_moves),
        UiMode::Tui => run_tui(agent, config.opponent.announce_random_moves),
    }
}

/// `RUST_LOG` when set, otherwise `default_filter`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(env_filter(&LoggingConfig::default().filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    handle
}

fn run_text(mut agent: MinimaxAgent, announce_random_moves: bool) -> Result<()> {
    let stdin = io::stdin();
    let outcome = ui::text::run(stdin.lock(), io::stdout(), &mut agent, announce_random_moves)
        .context("text game failed")?;
    if outcome == GameOutcome::InProgress {
        info!("game abandoned before it finished");
    }
    Ok(())
}

fn run_tui(agent: MinimaxAgent, announce_random_moves: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(agent, announce_random_moves);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
