//! Line windows around a hypothetical placement
//!
//! Scoring looks at one cell through one direction at a time: the nine
//! cells centered on the move under consideration, mapped into symbols
//! relative to the occupant being scored.

use crate::board::{Board, Pos, Stone};

/// Cells inspected on each side of the move
pub const WINDOW_RADIUS: usize = 4;
/// Window length (both sides plus the move itself)
pub const WINDOW_LEN: usize = 2 * WINDOW_RADIUS + 1;

/// One cell of a window, relative to the occupant being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The scored occupant's own stone
    Own,
    /// The other color
    Opponent,
    /// Free cell
    Empty,
    /// Off the board
    Wall,
}

/// Nine symbols along one direction, centered on the move
pub type Window = [Token; WINDOW_LEN];

/// Extract the window through `pos` along `dir`, as seen by `mover`.
///
/// The center slot is always `Own`: the window answers "what would this
/// line look like if `mover` held the cell", whatever the board says
/// there. Slots beyond the edge read `Wall`.
pub fn line_window(board: &Board, pos: Pos, mover: Stone, (dr, dc): (i32, i32)) -> Window {
    debug_assert!(board.in_bounds(pos.row as i32, pos.col as i32));

    let mut window = [Token::Wall; WINDOW_LEN];
    for (slot, token) in window.iter_mut().enumerate() {
        let offset = slot as i32 - WINDOW_RADIUS as i32;
        if offset == 0 {
            *token = Token::Own;
            continue;
        }
        let row = pos.row as i32 + offset * dr;
        let col = pos.col as i32 + offset * dc;
        if board.in_bounds(row, col) {
            *token = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Empty => Token::Empty,
                stone if stone == mover => Token::Own,
                _ => Token::Opponent,
            };
        }
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::{Empty as E, Opponent as O, Own as P, Wall as W};

    #[test]
    fn test_window_on_empty_board() {
        let board = Board::new(15);
        let window = line_window(&board, Pos::new(7, 7), Stone::Black, (0, 1));
        assert_eq!(window, [E, E, E, E, P, E, E, E, E]);
    }

    #[test]
    fn test_center_is_own_even_on_taken_cell() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::White);
        let window = line_window(&board, Pos::new(7, 7), Stone::Black, (0, 1));
        assert_eq!(window[WINDOW_RADIUS], P, "center must read Own for the mover");
    }

    #[test]
    fn test_walls_at_corner() {
        let board = Board::new(15);
        let window = line_window(&board, Pos::new(0, 0), Stone::Black, (0, 1));
        assert_eq!(window, [W, W, W, W, P, E, E, E, E]);
    }

    #[test]
    fn test_own_and_opponent_mapping() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 8), Stone::Black);
        board.place(Pos::new(7, 6), Stone::White);
        let window = line_window(&board, Pos::new(7, 7), Stone::Black, (0, 1));
        assert_eq!(window, [E, E, E, O, P, P, E, E, E]);
    }

    #[test]
    fn test_same_cells_swap_roles_for_the_other_color() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 8), Stone::Black);
        board.place(Pos::new(7, 6), Stone::White);
        let window = line_window(&board, Pos::new(7, 7), Stone::White, (0, 1));
        assert_eq!(window, [E, E, E, P, P, O, E, E, E]);
    }

    #[test]
    fn test_vertical_offsets() {
        let mut board = Board::new(15);
        board.place(Pos::new(9, 7), Stone::Black);
        let window = line_window(&board, Pos::new(7, 7), Stone::Black, (1, 0));
        assert_eq!(window[WINDOW_RADIUS + 2], P, "offset +2 along (1, 0) is two rows down");
        assert_eq!(window[WINDOW_RADIUS - 2], E);
    }

    #[test]
    fn test_knight_direction_window() {
        let mut board = Board::new(15);
        board.place(Pos::new(8, 9), Stone::Black); // one knight step from (7, 7)
        let window = line_window(&board, Pos::new(7, 7), Stone::Black, (1, 2));
        assert_eq!(window[WINDOW_RADIUS + 1], P);
    }

    #[test]
    fn test_small_board_is_mostly_wall() {
        let board = Board::new(2);
        let window = line_window(&board, Pos::new(0, 0), Stone::Black, (1, 1));
        assert_eq!(window, [W, W, W, W, P, E, W, W, W]);
    }
}
