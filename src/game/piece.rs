/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// Get the opposing piece. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Empty => "Empty",
            Piece::Player => "Player",
            Piece::Ai => "AI",
        }
    }

    /// Single character used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'X',
            Piece::Ai => 'O',
        }
    }
}
