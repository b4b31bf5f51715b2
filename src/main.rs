use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::Player;
use connect_four_minimax::logging;
use connect_four_minimax::ui::App;

/// Play Connect Four against the minimax engine in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Side the computer plays: a (moves first) or b
    #[arg(long)]
    ai: Option<String>,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    no_alpha_beta: bool,

    /// Show search score and node count after each computer move
    #[arg(long)]
    show_scores: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init("warn");

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(ai) = &cli.ai {
        config.play.ai_player = match ai.to_ascii_lowercase().as_str() {
            "a" => Player::A,
            "b" => Player::B,
            other => anyhow::bail!("unknown side '{other}' (expected 'a' or 'b')"),
        };
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.no_alpha_beta {
        config.search.alpha_beta = false;
    }
    if cli.show_scores {
        config.play.show_scores = true;
    }
    config.validate().context("invalid configuration")?;

    info!(
        "computer plays {}, depth {}, alpha-beta {}",
        config.play.ai_player, config.search.depth, config.search.alpha_beta
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the game loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal I/O failed")
}
