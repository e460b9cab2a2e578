use crate::ai::Agent;
use crate::error::EngineError;
use crate::game::{GameState, Outcome, Piece};

use super::metrics::GameSummary;

/// A finished game between the engine and an opponent.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub engine_side: Piece,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn summary(&self) -> GameSummary {
        let winner = match self.outcome {
            Outcome::Winner(piece) => Some(piece),
            Outcome::Draw => None,
        };
        GameSummary {
            engine_side: self.engine_side,
            winner,
            game_length: self.moves.len(),
        }
    }
}

/// Play one game to the end. `engine` plays `engine_side`; the human side
/// (`Piece::Player`) moves first.
pub fn play_game(
    engine: &mut dyn Agent,
    opponent: &mut dyn Agent,
    engine_side: Piece,
) -> Result<GameRecord, EngineError> {
    if engine_side.is_empty() {
        return Err(EngineError::EmptyPiece);
    }
    let mut state = GameState::initial();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let action = if state.to_move() == engine_side {
            engine.select_action(&state)?
        } else {
            opponent.select_action(&state)?
        };
        state.apply_move_mut(action)?;
        moves.push(action);
    }

    let outcome = state.outcome().ok_or(EngineError::NoLegalMove)?;
    Ok(GameRecord {
        moves,
        outcome,
        engine_side,
        final_state: state,
    })
}

/// One round of human-vs-engine play: apply the human's `column`, then let
/// `ai` answer unless that move ended the game.
///
/// Returns the column the AI played, if any.
pub fn play_turn(
    state: &mut GameState,
    column: usize,
    ai: &mut dyn Agent,
) -> Result<Option<usize>, EngineError> {
    state.apply_move_mut(column)?;
    if state.is_terminal() {
        return Ok(None);
    }
    let reply = ai.select_action(state)?;
    state.apply_move_mut(reply)?;
    Ok(Some(reply))
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a style mixing
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
