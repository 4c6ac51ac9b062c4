use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_n::config::{AppConfig, GameConfig};
use connect_n::ui::{App, Console};

/// Play Connect-N against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect_n", about = "Two-player Connect-N in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override how many pieces in a row win (board side is twice this)
    #[arg(long)]
    win_length: Option<usize>,

    /// Override player one's name (plays X, moves first)
    #[arg(long)]
    player_one: Option<String>,

    /// Override player two's name (plays O)
    #[arg(long)]
    player_two: Option<String>,

    /// Use the line-based console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    if let Some(name) = cli.player_one {
        app_config.game.player_one = name;
    }
    if let Some(name) = cli.player_two {
        app_config.game.player_two = name;
    }
    app_config.validate().context("invalid game settings")?;

    if cli.plain {
        let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
        console.run(&app_config.game).context("console game failed")?;
        Ok(())
    } else {
        run_tui(app_config.game)
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_tui(config: GameConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the UI loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
