use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameController;
use connect_four::session;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal, or drive the engine with JSON commands.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override grid width
    #[arg(long)]
    columns: Option<usize>,

    /// Override grid height
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of discs in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Read JSON commands from stdin and write JSON game states to stdout
    #[arg(long)]
    headless: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "CONNECT_FOUR_LOG", default_value = "warn")]
    log_level: String,

    /// Write logs to this file; needed to see logs while the terminal UI runs
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_logging(&cli)?;

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        app_config.game.columns = columns;
    }
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    app_config
        .validate()
        .context("validating command-line overrides")?;

    info!(
        columns = app_config.game.columns,
        rows = app_config.game.rows,
        win_length = app_config.game.win_length,
        headless = cli.headless,
        "starting"
    );

    if cli.headless {
        let mut controller = GameController::new(app_config.game);
        session::run(&mut controller, io::stdin().lock(), io::stdout().lock())
            .context("headless session failed")?;
        return Ok(());
    }

    run_tui(app_config).context("terminal UI failed")
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log filter '{}'", cli.log_level))?;

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    // Otherwise the terminal UI owns the screen and logs are dropped.

    Ok(())
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
