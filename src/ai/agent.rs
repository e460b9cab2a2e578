use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::game::GameState;

use super::heuristic::{Heuristic, WindowHeuristic};
use super::minimax::best_move_with;
use super::Difficulty;

/// Universal interface for all players the engine can drive.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Minimax agent with alpha-beta pruning at a fixed difficulty.
pub struct MinimaxAgent {
    difficulty: Difficulty,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    name: String,
}

impl MinimaxAgent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_rng(difficulty, StdRng::from_os_rng())
    }

    /// Agent whose tie-break draws are reproducible.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn from_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        MinimaxAgent {
            difficulty,
            heuristic: Box::new(WindowHeuristic),
            rng,
            name: format!("Minimax ({difficulty})"),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        if state.is_terminal() {
            return Err(EngineError::GameOver);
        }
        best_move_with(
            state.board(),
            state.to_move(),
            self.difficulty.depth(),
            self.heuristic.as_ref(),
            &mut self.rng,
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}
