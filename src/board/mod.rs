//! Board representation for gobang
//!
//! The grid edge length is picked at construction time (15 is the
//! classic size), so positions carry no size of their own and the
//! index math takes the edge length as a parameter.

pub mod board;


// Re-exports
pub use board::Board;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major cell index on a board with the given edge length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(size: usize, idx: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

/// The classic four line directions
const PRIMARY: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Primary plus the four knight-step vectors
const EXTENDED: [(i32, i32); 8] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
    (1, 2),  // Knight SEE
    (2, 1),  // Knight SSE
    (1, -2), // Knight SWW
    (2, -1), // Knight SSW
];

/// Line directions scanned by the move evaluator and the win check.
///
/// `Primary` is the classic rule set: rows, columns and both diagonals.
/// `Extended` adds the four knight-step vectors, so stones a knight's
/// move apart count as lines for scoring and for winning. That rule is
/// non-standard; the same set must drive both the evaluator and the win
/// check or the computer plays toward lines it can never win on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionSet {
    /// Rows, columns and both diagonals.
    #[default]
    Primary,
    /// Primary plus the four knight-step vectors (non-standard).
    Extended,
}

impl DirectionSet {
    /// Direction vectors in scan order
    #[inline]
    pub fn vectors(self) -> &'static [(i32, i32)] {
        match self {
            DirectionSet::Primary => &PRIMARY,
            DirectionSet::Extended => &EXTENDED,
        }
    }
}
