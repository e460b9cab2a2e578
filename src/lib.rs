//! # Connect Four AI
//!
//! A Connect Four opponent that picks its moves with depth-limited minimax
//! and alpha-beta pruning over a sliding-window heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Board, pieces, win detection and game state
//! - [`ai`]: Difficulty levels, heuristic, minimax search and agents
//! - [`arena`]: Headless games, human/engine turns and match statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
