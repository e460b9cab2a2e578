use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_ai::ai::Difficulty;
use connect_four_ai::arena::{Arena, OpponentKind};
use connect_four_ai::config::AppConfig;

/// Play the engine against an opponent over many games.
#[derive(Parser)]
#[command(name = "arena", about = "Benchmark the Connect Four engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the engine difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Override the opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Override the opponent difficulty (minimax opponent only)
    #[arg(long, value_enum)]
    opponent_difficulty: Option<Difficulty>,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Base seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    // Progress lines are logged at info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        app_config.engine.difficulty = difficulty;
    }
    if let Some(opponent) = cli.opponent {
        app_config.arena.opponent = opponent;
    }
    if let Some(difficulty) = cli.opponent_difficulty {
        app_config.arena.opponent_difficulty = difficulty;
    }
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.engine.seed = Some(seed);
    }
    app_config.validate().context("validating overrides")?;

    let arena = Arena::new(app_config.engine.clone(), app_config.arena.clone());
    let stats = arena.run().context("running arena")?;

    println!(
        "{} games | wins: {} ({:.1}%) | last {}: {:.1}% | losses: {} | draws: {} ({:.1}%) | avg_len: {:.1}",
        stats.total_games(),
        stats.wins(),
        stats.win_rate() * 100.0,
        app_config.arena.log_interval,
        stats.recent_win_rate(app_config.arena.log_interval) * 100.0,
        stats.losses(),
        stats.draws(),
        stats.draw_rate() * 100.0,
        stats.average_game_length()
    );
    Ok(())
}
