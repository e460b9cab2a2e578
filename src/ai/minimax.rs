//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node works on its own copy of the board, so sibling branches never
//! observe each other's moves and no undo step is needed. Scores are always
//! taken from the perspective of the piece the search runs for: that piece
//! maximizes, its opponent minimizes.
//!
//! Move selection runs one explicit top-level ply over every legal column and
//! hands each resulting board to [`Minimax::search`] from the minimizing side.
//! The top ply does not share alpha/beta between its siblings, so it never
//! prunes.

use log::debug;
use rand::Rng;

use crate::error::EngineError;
use crate::game::{has_won, is_terminal, Board, Piece};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::Difficulty;

/// Score of a position the searching side has already won.
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// Score of a position the opponent has already won.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;
pub const DRAW_SCORE: i64 = 0;

/// A top-level column has to beat this to replace the random fallback.
const TOP_LEVEL_FLOOR: i64 = -10_000;

/// Outcome of one search node. `column` is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Score of one top-level candidate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub column: usize,
    pub score: i64,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped
    pub cutoffs: u64,
}

/// Minimax searcher for one side.
///
/// The random source picks the fallback column of each node before its
/// children are searched; a fixed-seed generator makes the search fully
/// reproducible.
pub struct Minimax<'a, H: ?Sized, R: ?Sized> {
    piece: Piece,
    heuristic: &'a H,
    rng: &'a mut R,
    stats: SearchStats,
}

impl<'a, H, R> Minimax<'a, H, R>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    pub fn new(piece: Piece, heuristic: &'a H, rng: &'a mut R) -> Self {
        Minimax {
            piece,
            heuristic,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` to `depth` plies.
    ///
    /// Terminal positions are checked before the remaining depth so a win is
    /// scored as a win at any depth.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;
        let columns = board.valid_columns();
        let terminal = is_terminal(board);

        if depth == 0 || terminal {
            if !terminal {
                return SearchResult::leaf(self.heuristic.evaluate(board, self.piece));
            }
            return if has_won(board, self.piece) {
                SearchResult::leaf(WIN_SCORE)
            } else if has_won(board, self.piece.opponent()) {
                SearchResult::leaf(LOSS_SCORE)
            } else {
                SearchResult::leaf(DRAW_SCORE)
            };
        }

        let mut column = columns[self.rng.random_range(0..columns.len())];

        if maximizing {
            let mut value = i64::MIN;
            for &col in &columns {
                let child = board.with_move(col, self.piece);
                let score = self.search(&child, depth - 1, alpha, beta, false).score;
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: value,
            }
        } else {
            let mut value = i64::MAX;
            for &col in &columns {
                let child = board.with_move(col, self.piece.opponent());
                let score = self.search(&child, depth - 1, alpha, beta, true).score;
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: value,
            }
        }
    }

    /// Top-level ply: drop into each legal column in ascending order and
    /// search the reply tree to `depth` with a fresh window per column.
    pub fn score_moves(&mut self, board: &Board, depth: usize) -> Vec<MoveScore> {
        board
            .valid_columns()
            .into_iter()
            .map(|column| {
                let child = board.with_move(column, self.piece);
                let score = self.search(&child, depth, i64::MIN, i64::MAX, false).score;
                MoveScore { column, score }
            })
            .collect()
    }
}

/// Minimax for the AI piece with the default heuristic.
pub fn minimax<R: Rng + ?Sized>(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
    rng: &mut R,
) -> SearchResult {
    Minimax::new(Piece::Ai, &WindowHeuristic, rng).search(board, depth, alpha, beta, maximizing)
}

/// Score every legal column for `piece` at the given reply depth.
pub fn score_moves<R: Rng + ?Sized>(
    board: &Board,
    piece: Piece,
    depth: usize,
    rng: &mut R,
) -> Result<Vec<MoveScore>, EngineError> {
    if piece.is_empty() {
        return Err(EngineError::EmptyPiece);
    }
    if board.valid_columns().is_empty() {
        return Err(EngineError::NoLegalMove);
    }
    Ok(Minimax::new(piece, &WindowHeuristic, rng).score_moves(board, depth))
}

/// Choose a column for `piece` at the depth `difficulty` maps to.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    piece: Piece,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, EngineError> {
    best_move_with(board, piece, difficulty.depth(), &WindowHeuristic, rng)
}

/// Like [`pick_best_move`], but also hands back the top-level scores the
/// choice was made from.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    piece: Piece,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveChoice, EngineError> {
    choose_move_with(board, piece, difficulty.depth(), &WindowHeuristic, rng)
}

/// Choose a column for `piece`, searching `depth` plies below the top ply.
pub fn best_move_with<H, R>(
    board: &Board,
    piece: Piece,
    depth: usize,
    heuristic: &H,
    rng: &mut R,
) -> Result<usize, EngineError>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    choose_move_with(board, piece, depth, heuristic, rng).map(|choice| choice.column)
}

/// A chosen column together with the score of every legal column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveChoice {
    pub column: usize,
    pub scores: Vec<MoveScore>,
}

/// Run the top ply and pick from its scores.
///
/// The first column with the strictly highest score wins. A uniformly random
/// legal column is drawn up front and kept when no column scores above
/// the top-level floor, which only happens when every move loses.
pub fn choose_move_with<H, R>(
    board: &Board,
    piece: Piece,
    depth: usize,
    heuristic: &H,
    rng: &mut R,
) -> Result<MoveChoice, EngineError>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    if piece.is_empty() {
        return Err(EngineError::EmptyPiece);
    }
    let columns = board.valid_columns();
    if columns.is_empty() {
        return Err(EngineError::NoLegalMove);
    }

    let mut best_col = columns[rng.random_range(0..columns.len())];
    let mut best_score = TOP_LEVEL_FLOOR;

    let mut searcher = Minimax::new(piece, heuristic, rng);
    let scores = searcher.score_moves(board, depth);
    for mv in &scores {
        if mv.score > best_score {
            best_score = mv.score;
            best_col = mv.column;
        }
    }

    let stats = searcher.stats();
    debug!(
        "{} picks column {best_col} at depth {depth} ({} nodes, {} cutoffs): {:?}",
        piece.name(),
        stats.nodes,
        stats.cutoffs,
        scores
            .iter()
            .map(|mv| (mv.column, mv.score))
            .collect::<Vec<_>>()
    );

    Ok(MoveChoice {
        column: best_col,
        scores,
    })
}
