//! Headless play: single games between agents, the human-then-engine turn
//! used by interactive front ends, and multi-game matches with statistics.

mod game;
pub mod metrics;
mod runner;

pub use game::{game_seed, play_game, play_turn, GameRecord};
pub use metrics::{GameSummary, MatchStats};
pub use runner::{Arena, ArenaConfig, OpponentKind};
