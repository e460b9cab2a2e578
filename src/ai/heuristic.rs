use crate::game::{Board, Piece, CENTER_COL, COLS, ROWS, WINDOW_LEN};

pub const FOUR_SCORE: i64 = 100;
pub const THREE_SCORE: i64 = 5;
pub const TWO_SCORE: i64 = 2;
pub const OPPONENT_THREE_PENALTY: i64 = 4;
pub const CENTER_WEIGHT: i64 = 3;

/// Trait for evaluating a board position from a piece's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, piece: Piece) -> i64;
}

/// Default heuristic: sliding 4-cell windows plus a center column bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> i64 {
        score_position(board, piece)
    }
}

/// Score one 4-cell window for `piece`.
///
/// The opponent-three penalty is applied on top of whatever `piece` earns in
/// the same window. `piece` must be a real side, never [`Piece::Empty`].
pub fn evaluate_window(window: [Piece; WINDOW_LEN], piece: Piece) -> i64 {
    debug_assert!(!piece.is_empty(), "windows are scored for a side");
    let opp = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opp).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };

    if theirs == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }

    score
}

/// Static score of `board` for `piece`.
///
/// Windows overlap, so a cell counts once for every window it sits in.
/// `piece` must not be [`Piece::Empty`].
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    debug_assert!(!piece.is_empty(), "positions are scored for a side");
    let window = |cells: [(usize, usize); WINDOW_LEN]| {
        evaluate_window(cells.map(|(row, col)| board.get(row, col)), piece)
    };

    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == piece)
        .count() as i64;
    let mut score = center * CENTER_WEIGHT;

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - WINDOW_LEN {
            score += window([(row, col), (row, col + 1), (row, col + 2), (row, col + 3)]);
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - WINDOW_LEN {
            score += window([(row, col), (row + 1, col), (row + 2, col), (row + 3, col)]);
        }
    }

    // Positive slope
    for row in 0..=ROWS - WINDOW_LEN {
        for col in 0..=COLS - WINDOW_LEN {
            score += window([
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ]);
        }
    }

    // Negative slope
    for row in 0..=ROWS - WINDOW_LEN {
        for col in 0..=COLS - WINDOW_LEN {
            score += window([
                (row + 3, col),
                (row + 2, col + 1),
                (row + 1, col + 2),
                (row, col + 3),
            ]);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::Piece::{Ai, Empty, Player};

    fn board_from(moves: &[(usize, Piece)]) -> Board {
        let mut board = Board::new();
        for &(col, piece) in moves {
            board.play(col, piece).unwrap();
        }
        board
    }

    fn relabel(board: &Board) -> Board {
        let mut swapped = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = board.get(row, col);
                if !cell.is_empty() {
                    swapped.drop_piece(row, col, cell.opponent()).unwrap();
                }
            }
        }
        swapped
    }

    // --- Window tests ---

    #[test]
    fn window_thresholds() {
        assert_eq!(evaluate_window([Ai, Ai, Ai, Ai], Ai), 100);
        assert_eq!(evaluate_window([Ai, Ai, Empty, Ai], Ai), 5);
        assert_eq!(evaluate_window([Empty, Ai, Empty, Ai], Ai), 2);
        assert_eq!(evaluate_window([Player, Player, Empty, Player], Ai), -4);
    }

    #[test]
    fn window_mixed_contributes_nothing() {
        assert_eq!(evaluate_window([Ai, Ai, Player, Empty], Ai), 0);
        assert_eq!(evaluate_window([Ai, Empty, Empty, Empty], Ai), 0);
        assert_eq!(evaluate_window([Empty; 4], Ai), 0);
        assert_eq!(evaluate_window([Ai, Ai, Ai, Player], Ai), 0);
        // Opponent four is not penalised by the window itself
        assert_eq!(evaluate_window([Player; 4], Ai), 0);
    }

    #[test]
    fn window_is_symmetric_between_pieces() {
        assert_eq!(
            evaluate_window([Player, Player, Empty, Player], Player),
            evaluate_window([Ai, Ai, Empty, Ai], Ai)
        );
        assert_eq!(evaluate_window([Ai, Ai, Empty, Ai], Player), -4);
    }

    // --- Position tests ---

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score_position(&board, Ai), 0);
        assert_eq!(score_position(&board, Player), 0);
    }

    #[test]
    fn single_center_piece_scores_center_bias() {
        let board = board_from(&[(3, Ai)]);
        assert_eq!(score_position(&board, Ai), 3);
        assert_eq!(score_position(&board, Player), 0);
    }

    #[test]
    fn center_preferred_over_edge() {
        let center = board_from(&[(3, Ai)]);
        let edge = board_from(&[(0, Ai)]);
        assert!(score_position(&center, Ai) > score_position(&edge, Ai));
    }

    #[test]
    fn opponent_three_is_penalised() {
        // Player holds row 0 cols 0..3; the window 0..=3 has one gap at col 3
        let board = board_from(&[(0, Player), (1, Player), (2, Player)]);
        assert_eq!(score_position(&board, Ai), -4);
    }

    #[test]
    fn own_three_scores_windows_and_center() {
        // Ai at row 0 cols 1,2,3:
        //   window 0..=3 -> 5, window 1..=4 -> 5, window 2..=5 -> 2, center -> 3
        let board = board_from(&[(1, Ai), (2, Ai), (3, Ai)]);
        assert_eq!(score_position(&board, Ai), 15);
    }

    #[test]
    fn score_is_symmetric_under_relabeling() {
        let board = board_from(&[
            (3, Ai),
            (3, Player),
            (2, Ai),
            (4, Player),
            (4, Ai),
            (1, Player),
            (5, Ai),
            (3, Ai),
            (0, Player),
        ]);
        let swapped = relabel(&board);
        assert_eq!(score_position(&board, Ai), score_position(&swapped, Player));
        assert_eq!(score_position(&board, Player), score_position(&swapped, Ai));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "scored for a side")]
    fn window_rejects_empty_piece() {
        evaluate_window([Ai, Ai, Empty, Ai], Empty);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "scored for a side")]
    fn position_rejects_empty_piece() {
        score_position(&board_from(&[(3, Ai)]), Empty);
    }

    #[test]
    fn heuristic_trait_matches_score_position() {
        let board = board_from(&[(3, Ai), (2, Player), (4, Ai)]);
        assert_eq!(
            WindowHeuristic.evaluate(&board, Ai),
            score_position(&board, Ai)
        );
    }
}
