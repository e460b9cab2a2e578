use std::collections::VecDeque;

use crate::game::Piece;

/// Result of a single game, seen from the engine's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub engine_side: Piece,
    pub winner: Option<Piece>,
    pub game_length: usize,
}

impl GameSummary {
    pub fn engine_won(&self) -> bool {
        self.winner == Some(self.engine_side)
    }

    pub fn engine_lost(&self) -> bool {
        self.winner == Some(self.engine_side.opponent())
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Match statistics with rolling window computations and lifetime totals.
pub struct MatchStats {
    recent: VecDeque<GameSummary>,
    capacity: usize,
    wins: usize,
    losses: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchStats {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            wins: 0,
            losses: 0,
            draws: 0,
            total_moves: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record(&mut self, summary: GameSummary) {
        if summary.engine_won() {
            self.wins += 1;
        } else if summary.engine_lost() {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
        self.total_moves += summary.game_length;

        self.recent.push_back(summary);
        if self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    pub fn total_games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Lifetime engine win rate.
    pub fn win_rate(&self) -> f32 {
        ratio(self.wins, self.total_games())
    }

    /// Lifetime draw rate.
    pub fn draw_rate(&self) -> f32 {
        ratio(self.draws, self.total_games())
    }

    /// Lifetime average game length in plies.
    pub fn average_game_length(&self) -> f32 {
        ratio(self.total_moves, self.total_games())
    }

    /// Engine win rate over the last N games.
    pub fn recent_win_rate(&self, last_n: usize) -> f32 {
        let n = self.recent.len().min(last_n);
        let wins = self
            .recent
            .iter()
            .rev()
            .take(n)
            .filter(|s| s.engine_won())
            .count();
        ratio(wins, n)
    }
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}

fn ratio(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    count as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(engine_side: Piece, winner: Option<Piece>, game_length: usize) -> GameSummary {
        GameSummary {
            engine_side,
            winner,
            game_length,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::new();
        assert_eq!(stats.total_games(), 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
        assert_eq!(stats.recent_win_rate(10), 0.0);
    }

    #[test]
    fn test_counts_from_engine_side() {
        let mut stats = MatchStats::new();
        stats.record(summary(Piece::Ai, Some(Piece::Ai), 10));
        stats.record(summary(Piece::Player, Some(Piece::Player), 20));
        stats.record(summary(Piece::Ai, Some(Piece::Player), 30));
        stats.record(summary(Piece::Player, None, 42));

        assert_eq!(stats.wins(), 2);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.draws(), 1);
        assert!((stats.win_rate() - 0.5).abs() < 1e-6);
        assert!((stats.draw_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 25.5).abs() < 1e-6);
    }

    #[test]
    fn test_recent_window_is_capped() {
        let mut stats = MatchStats::with_capacity(2);
        stats.record(summary(Piece::Ai, Some(Piece::Player), 8));
        stats.record(summary(Piece::Ai, Some(Piece::Ai), 8));
        stats.record(summary(Piece::Ai, Some(Piece::Ai), 8));

        assert_eq!(stats.total_games(), 3);
        assert!((stats.recent_win_rate(10) - 1.0).abs() < 1e-6);
        assert!((stats.win_rate() - 2.0 / 3.0).abs() < 1e-6);
    }
}
