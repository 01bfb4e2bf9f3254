//! Win condition checking
//!
//! A placement wins when the line through it reaches five or more
//! stones of the same color along any scanned direction. Only the
//! lines through the last move are inspected; the board is never
//! scanned wholesale.

use crate::board::{Board, DirectionSet, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LEN: usize = 5;

/// Contiguous same-color run through `pos` along one direction.
///
/// The cell at `pos` itself counts as `stone` without being read, so
/// the check also answers "would placing here win?" for an empty cell.
fn run_length(board: &Board, pos: Pos, stone: Stone, (dr, dc): (i32, i32)) -> usize {
    let mut count = 1;
    // Positive direction
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.in_bounds(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        count += 1;
        r += dr;
        c += dc;
    }
    // Negative direction
    r = pos.row as i32 - dr;
    c = pos.col as i32 - dc;
    while board.in_bounds(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
        count += 1;
        r -= dr;
        c -= dc;
    }
    count
}

/// Check whether a stone placed at `pos` completes five in a row.
///
/// Runs stop at an empty cell, the other color, or the edge. Six or
/// more in a row also wins.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, stone: Stone, dirs: DirectionSet) -> bool {
    dirs.vectors()
        .iter()
        .any(|&dir| run_length(board, pos, stone, dir) >= WIN_LEN)
}
