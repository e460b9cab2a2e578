use super::win::{self, Outcome};
use super::{Board, Piece};
use crate::error::EngineError;

/// A game in progress: the board, whose turn it is, and the result once the
/// game has ended. The human player moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Piece,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            to_move: Piece::Player,
            outcome: None,
        }
    }

    /// Replay alternating moves starting with the human player.
    pub fn from_moves(columns: &[usize]) -> Result<Self, EngineError> {
        let mut state = Self::initial();
        for &col in columns {
            state.apply_move_mut(col)?;
        }
        Ok(state)
    }

    /// Get the piece that moves next
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, EngineError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }

        self.board.play(column, self.to_move)?;
        self.outcome = win::outcome(&self.board);
        self.to_move = self.to_move.opponent();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
