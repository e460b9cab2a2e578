use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect_four_ai::ai::{choose_move, Difficulty, MinimaxAgent};
use connect_four_ai::arena::play_turn;
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::{GameState, Outcome};

/// Ask the engine for its move in a Connect Four position.
#[derive(Parser)]
#[command(name = "connect_four", about = "Analyse a Connect Four position")]
struct Cli {
    /// Columns played so far (0-6), comma separated, human first
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Human move to play now; the engine answers it
    #[arg(long)]
    play: Option<usize>,

    /// Override the configured difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the tie-break random source
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(difficulty) = cli.difficulty {
        app_config.engine.difficulty = difficulty;
    }
    if let Some(seed) = cli.seed {
        app_config.engine.seed = Some(seed);
    }
    let engine = app_config.engine;

    let mut state = GameState::from_moves(&cli.moves)
        .with_context(|| format!("replaying moves {:?}", cli.moves))?;

    if let Some(column) = cli.play {
        let mut ai = match engine.seed {
            Some(seed) => MinimaxAgent::seeded(engine.difficulty, seed),
            None => MinimaxAgent::new(engine.difficulty),
        };
        let reply = play_turn(&mut state, column, &mut ai)
            .with_context(|| format!("playing column {column}"))?;
        if let Some(reply) = reply {
            println!("Engine ({}) answers with column {reply}", engine.difficulty);
        }
        println!("{}\n", state.board());
        report_outcome(&state);
        return Ok(());
    }

    println!("{}\n", state.board());
    if report_outcome(&state) {
        return Ok(());
    }

    let mut rng = match engine.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let piece = state.to_move();
    let choice = choose_move(state.board(), piece, engine.difficulty, &mut rng)
        .context("picking a move")?;

    println!("{} to move, difficulty {}:", piece.name(), engine.difficulty);
    for mv in &choice.scores {
        println!("  column {}: {}", mv.column, mv.score);
    }
    println!("Best move: column {}", choice.column);

    Ok(())
}

/// Print the result of a finished game. Returns true if the game is over.
fn report_outcome(state: &GameState) -> bool {
    match state.outcome() {
        Some(Outcome::Winner(piece)) => {
            println!("{} wins!", piece.name());
            true
        }
        Some(Outcome::Draw) => {
            println!("It's a draw!");
            true
        }
        None => false,
    }
}
