//! Move selection: difficulty levels, the window heuristic, minimax search
//! and the agents built on top of it.

mod agent;
mod difficulty;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::{Agent, MinimaxAgent};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use heuristic::{evaluate_window, score_position, Heuristic, WindowHeuristic};
pub use minimax::{
    best_move_with, choose_move, choose_move_with, minimax, pick_best_move, score_moves, Minimax,
    MoveChoice, MoveScore, SearchResult, SearchStats, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};
pub use random::RandomAgent;
