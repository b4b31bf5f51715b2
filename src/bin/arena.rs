use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use connect_four_minimax::ai::{Agent, MinimaxAgent, RandomAgent, SearchConfig};
use connect_four_minimax::arena::run_match;
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::logging;

/// Run headless matches between Connect Four agents.
#[derive(Parser)]
#[command(name = "arena", about = "Pit Connect Four agents against each other")]
struct Cli {
    /// First agent: minimax or random
    #[arg(long, default_value = "minimax")]
    first: String,

    /// Second agent: minimax or random
    #[arg(long, default_value = "random")]
    second: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth for minimax agents
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn build_agent(kind: &str, search: &SearchConfig, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    match kind {
        "minimax" => Ok(Box::new(MinimaxAgent::from_config(search))),
        "random" => Ok(Box::new(match seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        })),
        other => bail!("unknown agent '{}' (expected 'minimax' or 'random')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init("info");

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.seed.is_some() {
        app_config.arena.rng_seed = cli.seed;
    }
    app_config.validate().context("invalid configuration")?;

    let seed = app_config.arena.rng_seed;
    let mut first = build_agent(&cli.first, &app_config.search, seed)?;
    // Offset so two seeded random agents don't mirror each other
    let mut second = build_agent(&cli.second, &app_config.search, seed.map(|s| s.wrapping_add(1)))?;

    info!(
        "{} vs {}: {} games, search depth {}",
        first.name(),
        second.name(),
        app_config.arena.games,
        app_config.search.depth
    );

    let stats = run_match(first.as_mut(), second.as_mut(), app_config.arena.games)?;

    println!("-------------------------------------------");
    println!(
        "{:<10} wins: {:>4} ({:.1}%)",
        first.name(),
        stats.first_wins,
        stats.first_win_rate() * 100.0
    );
    println!(
        "{:<10} wins: {:>4} ({:.1}%)",
        second.name(),
        stats.second_wins,
        stats.second_win_rate() * 100.0
    );
    println!(
        "{:<10}     : {:>4} ({:.1}%)",
        "draws",
        stats.draws,
        stats.draw_rate() * 100.0
    );
    println!("average game length: {:.1} moves", stats.average_game_length());

    Ok(())
}
