//! Core Connect Four game logic: board representation, pieces, win detection
//! and a game state with immutable transitions.

mod board;
mod piece;
mod state;
pub mod win;

pub use board::{Board, CENTER_COL, COLS, ROWS};
pub use piece::Piece;
pub use state::GameState;
pub use win::{has_won, is_terminal, Outcome, WINDOW_LEN};
