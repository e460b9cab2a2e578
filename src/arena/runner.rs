use log::{debug, info};

use crate::ai::{Agent, Difficulty, MinimaxAgent, RandomAgent};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::Piece;

use super::game::{game_seed, play_game};
use super::metrics::MatchStats;

/// Who the engine plays against in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Random,
    Minimax,
}

/// Arena configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub log_interval: usize,
    pub opponent: OpponentKind,
    /// Only used when `opponent` is `minimax`
    pub opponent_difficulty: Difficulty,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            log_interval: 10,
            opponent: OpponentKind::Random,
            opponent_difficulty: Difficulty::Easy,
        }
    }
}

/// Plays a series of games between the engine and a configured opponent,
/// alternating who moves first.
pub struct Arena {
    engine: EngineConfig,
    config: ArenaConfig,
}

impl Arena {
    pub fn new(engine: EngineConfig, config: ArenaConfig) -> Self {
        Arena { engine, config }
    }

    /// Run every game and return the collected statistics.
    pub fn run(&self) -> Result<MatchStats, EngineError> {
        let mut stats = MatchStats::new();

        info!(
            "Starting {} games: minimax ({}) vs {:?}",
            self.config.games, self.engine.difficulty, self.config.opponent
        );

        for game_idx in 0..self.config.games {
            let (mut engine, mut opponent) = self.agents(game_idx);
            let engine_side = if game_idx % 2 == 0 {
                Piece::Player
            } else {
                Piece::Ai
            };

            let record = play_game(engine.as_mut(), opponent.as_mut(), engine_side)?;
            debug!(
                "game {} ({} as {}): {:?} in {} moves {:?}",
                game_idx + 1,
                engine.name(),
                engine_side.name(),
                record.outcome,
                record.moves.len(),
                record.moves
            );
            stats.record(record.summary());

            if (game_idx + 1) % self.config.log_interval == 0 {
                info!(
                    "Game {}/{} | win: {:.1}% | last {}: {:.1}% | draw: {:.1}% | avg_len: {:.1}",
                    game_idx + 1,
                    self.config.games,
                    stats.win_rate() * 100.0,
                    self.config.log_interval,
                    stats.recent_win_rate(self.config.log_interval) * 100.0,
                    stats.draw_rate() * 100.0,
                    stats.average_game_length()
                );
            }
        }

        info!(
            "Finished: {} wins, {} losses, {} draws",
            stats.wins(),
            stats.losses(),
            stats.draws()
        );
        Ok(stats)
    }

    fn agents(&self, game_idx: usize) -> (Box<dyn Agent>, Box<dyn Agent>) {
        let difficulty = self.engine.difficulty;
        let opponent_difficulty = self.config.opponent_difficulty;
        match self.engine.seed {
            Some(seed) => {
                let engine_seed = game_seed(seed, game_idx);
                let opponent_seed = game_seed(engine_seed, game_idx);
                let opponent: Box<dyn Agent> = match self.config.opponent {
                    OpponentKind::Random => Box::new(RandomAgent::seeded(opponent_seed)),
                    OpponentKind::Minimax => {
                        Box::new(MinimaxAgent::seeded(opponent_difficulty, opponent_seed))
                    }
                };
                (Box::new(MinimaxAgent::seeded(difficulty, engine_seed)), opponent)
            }
            None => {
                let opponent: Box<dyn Agent> = match self.config.opponent {
                    OpponentKind::Random => Box::new(RandomAgent::new()),
                    OpponentKind::Minimax => Box::new(MinimaxAgent::new(opponent_difficulty)),
                };
                (Box::new(MinimaxAgent::new(difficulty)), opponent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine(difficulty: Difficulty) -> EngineConfig {
        EngineConfig {
            difficulty,
            seed: Some(9),
        }
    }

    #[test]
    fn test_runs_configured_number_of_games() {
        let arena = Arena::new(
            seeded_engine(Difficulty::Easy),
            ArenaConfig {
                games: 4,
                ..ArenaConfig::default()
            },
        );
        let stats = arena.run().unwrap();
        assert_eq!(stats.total_games(), 4);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = ArenaConfig {
            games: 4,
            ..ArenaConfig::default()
        };
        let first = Arena::new(seeded_engine(Difficulty::Easy), config.clone())
            .run()
            .unwrap();
        let second = Arena::new(seeded_engine(Difficulty::Easy), config)
            .run()
            .unwrap();
        assert_eq!(first.wins(), second.wins());
        assert_eq!(first.draws(), second.draws());
        assert_eq!(first.average_game_length(), second.average_game_length());
    }

    #[test]
    fn test_beats_random_agent() {
        let arena = Arena::new(
            seeded_engine(Difficulty::Medium),
            ArenaConfig {
                games: 10,
                ..ArenaConfig::default()
            },
        );
        let stats = arena.run().unwrap();
        assert!(
            stats.win_rate() > 0.8,
            "Minimax should beat random >80% of the time, got {:.0}% ({}/{})",
            stats.win_rate() * 100.0,
            stats.wins(),
            stats.total_games()
        );
    }

    #[test]
    fn test_recent_window_spans_whole_short_match() {
        let arena = Arena::new(
            seeded_engine(Difficulty::Easy),
            ArenaConfig {
                games: 6,
                log_interval: 3,
                ..ArenaConfig::default()
            },
        );
        let stats = arena.run().unwrap();
        assert_eq!(stats.recent_win_rate(6), stats.win_rate());
        assert!((0.0..=1.0).contains(&stats.recent_win_rate(3)));
    }

    #[test]
    fn test_minimax_opponent() {
        let arena = Arena::new(
            seeded_engine(Difficulty::Easy),
            ArenaConfig {
                games: 2,
                opponent: OpponentKind::Minimax,
                opponent_difficulty: Difficulty::Easy,
                ..ArenaConfig::default()
            },
        );
        let stats = arena.run().unwrap();
        assert_eq!(stats.total_games(), 2);
    }
}
