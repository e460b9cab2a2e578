//! Four-in-a-row detection and game-end classification.

use super::{Board, Piece, COLS, ROWS};

pub const WINDOW_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Draw,
}

/// Check whether `piece` has four consecutive cells in a row, a column or
/// either diagonal.
pub fn has_won(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    let run = |cells: [(usize, usize); WINDOW_LEN]| {
        cells.iter().all(|&(row, col)| board.get(row, col) == piece)
    };

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - WINDOW_LEN {
            if run([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]) {
                return true;
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - WINDOW_LEN {
            if run([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]) {
                return true;
            }
        }
    }

    // Positive slope (/)
    for row in 0..=ROWS - WINDOW_LEN {
        for col in 0..=COLS - WINDOW_LEN {
            if run([
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ]) {
                return true;
            }
        }
    }

    // Negative slope (\)
    for row in WINDOW_LEN - 1..ROWS {
        for col in 0..=COLS - WINDOW_LEN {
            if run([
                (row, col),
                (row - 1, col + 1),
                (row - 2, col + 2),
                (row - 3, col + 3),
            ]) {
                return true;
            }
        }
    }

    false
}

/// True when either side has won or no column is playable.
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Piece::Player) || has_won(board, Piece::Ai) || board.valid_columns().is_empty()
}

/// Classify a finished game. `None` while moves remain and nobody has won.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_won(board, Piece::Ai) {
        Some(Outcome::Winner(Piece::Ai))
    } else if has_won(board, Piece::Player) {
        Some(Outcome::Winner(Piece::Player))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}
