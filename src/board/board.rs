//! Board structure backed by a flat row-major grid

use super::{Pos, Stone};

/// Square game board with a runtime edge length.
///
/// Cells live in a single row-major `Vec`; an occupied-cell counter
/// keeps fullness checks O(1).
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    stones: usize,
}

impl Board {
    /// Classic gobang board edge
    pub const DEFAULT_SIZE: usize = 15;

    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        debug_assert!(
            size > 0 && size <= u8::MAX as usize + 1,
            "edge length must fit u8 coordinates"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    /// Board edge length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that signed coordinates land on the grid
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Get stone at position. Callers pass on-grid positions.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(self.in_bounds(pos.row as i32, pos.col as i32));
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone.
    ///
    /// Returns false and leaves the board untouched when the position
    /// is off the grid, the cell is taken, or `stone` is `Empty`.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty
            || pos.row as usize >= self.size
            || pos.col as usize >= self.size
        {
            return false;
        }
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            return false;
        }
        self.cells[idx] = stone;
        self.stones += 1;
        true
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Row-major snapshot of every cell, for rendering
    #[inline]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &stone)| stone == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(self.size, idx))
            .collect()
    }

    /// Remove every stone
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
