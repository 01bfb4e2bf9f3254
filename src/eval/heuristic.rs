//! Heuristic move scoring
//!
//! One-ply evaluation: every empty cell is scored as if the mover
//! placed there (offense) plus as if the opponent placed there
//! (defense), and the best total wins. No look-ahead.

use crate::board::{Board, DirectionSet, Pos, Stone};

use super::patterns::score_window;
use super::window::line_window;

/// Total shape score for `occupant` hypothetically placed at `pos`.
///
/// Sums the window score over every scanned direction.
#[must_use]
pub fn point_score(board: &Board, pos: Pos, occupant: Stone, dirs: DirectionSet) -> i32 {
    dirs.vectors()
        .iter()
        .map(|&dir| score_window(&line_window(board, pos, occupant, dir)))
        .sum()
}

/// Pick the best cell for `mover`.
///
/// Scans every empty cell in row-major order, totaling offense (the
/// mover's own score) and defense (what the opponent would get from
/// the same cell), equally weighted. Only a strictly greater total
/// replaces the current best, so the earliest cell wins ties. Returns
/// `None` only when the board is full.
#[must_use]
pub fn best_move(board: &Board, mover: Stone, dirs: DirectionSet) -> Option<Pos> {
    if board.is_full() {
        return None;
    }

    let opponent = mover.opponent();
    let size = board.size();
    let mut best: Option<(Pos, i32)> = None;

    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row as u8, col as u8);
            if !board.is_empty(pos) {
                continue;
            }
            let total =
                point_score(board, pos, mover, dirs) + point_score(board, pos, opponent, dirs);
            if best.map_or(true, |(_, score)| total > score) {
                best = Some((pos, total));
            }
        }
    }

    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::PatternScore;

    const DIRS: DirectionSet = DirectionSet::Primary;

    #[test]
    fn test_point_score_is_deterministic() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(8, 8), Stone::White);
        let pos = Pos::new(7, 8);
        assert_eq!(
            point_score(&board, pos, Stone::Black, DIRS),
            point_score(&board, pos, Stone::Black, DIRS)
        );
    }

    #[test]
    fn test_every_empty_cell_scores_on_empty_board() {
        let board = Board::new(15);
        for pos in board.empty_positions() {
            let score = point_score(&board, pos, Stone::Black, DIRS);
            assert!(score > 0, "cell ({}, {}) scored {}", pos.row, pos.col, score);
        }
    }

    #[test]
    fn test_empty_board_first_maximum() {
        // Cells one step inside every edge see a live one in all four
        // directions (4 x 50, doubled for defense = 400); (1, 1) is the
        // first such cell in row-major order
        let board = Board::new(15);
        assert_eq!(best_move(&board, Stone::Black, DIRS), Some(Pos::new(1, 1)));

        // The corner is the weakest spot: three one-sided directions
        // at 10 each, the fourth walled on both sides, doubled for
        // defense
        let corner = Pos::new(0, 0);
        let total = point_score(&board, corner, Stone::Black, DIRS)
            + point_score(&board, corner, Stone::White, DIRS);
        assert_eq!(total, 60);
    }

    #[test]
    fn test_all_equal_scores_keep_first_cell() {
        // On an empty 2x2 every cell totals the same by symmetry, so
        // the strict-max scan must settle on (0, 0)
        let board = Board::new(2);
        assert_eq!(best_move(&board, Stone::Black, DIRS), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_reply_next_to_lone_stone() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black);

        let reply = best_move(&board, Stone::White, DIRS).unwrap();
        assert_eq!(reply, Pos::new(6, 6), "first of the eight equal neighbors");

        // Shared diagonal: sleep one for White plus a live-two block
        let total = point_score(&board, reply, Stone::White, DIRS)
            + point_score(&board, reply, Stone::Black, DIRS);
        assert_eq!(total, 810);
    }

    #[test]
    fn test_completing_five_dominates() {
        let mut board = Board::new(15);
        for col in 5..9 {
            board.place(Pos::new(5, col), Stone::Black);
        }
        let score = point_score(&board, Pos::new(5, 4), Stone::Black, DIRS);
        assert!(score >= PatternScore::FIVE, "got {}", score);
        assert_eq!(best_move(&board, Stone::Black, DIRS), Some(Pos::new(5, 4)));
    }

    #[test]
    fn test_defense_blocks_opponent_four() {
        let mut board = Board::new(15);
        for col in 5..9 {
            board.place(Pos::new(5, col), Stone::White);
        }
        // Black has nothing of its own; the defense term forces the block
        assert_eq!(best_move(&board, Stone::Black, DIRS), Some(Pos::new(5, 4)));
    }

    #[test]
    fn test_live_four_tier() {
        let mut board = Board::new(15);
        for col in 5..8 {
            board.place(Pos::new(5, col), Stone::Black);
        }
        let score = point_score(&board, Pos::new(5, 4), Stone::Black, DIRS);
        assert!(score >= PatternScore::LIVE_FOUR, "got {}", score);
        assert!(score < PatternScore::FIVE, "got {}", score);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new(3);
        for row in 0..3u8 {
            for col in 0..3u8 {
                board.place(Pos::new(row, col), Stone::Black);
            }
        }
        assert_eq!(best_move(&board, Stone::White, DIRS), None);
    }

    #[test]
    fn test_last_empty_cell_is_taken() {
        let mut board = Board::new(3);
        for row in 0..3u8 {
            for col in 0..3u8 {
                if (row, col) != (2, 1) {
                    board.place(Pos::new(row, col), Stone::Black);
                }
            }
        }
        assert_eq!(best_move(&board, Stone::White, DIRS), Some(Pos::new(2, 1)));
    }

    #[test]
    fn test_extended_directions_see_knight_lines() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black);

        // (6, 5) is a knight step from the stone: invisible to the
        // primary set, a live two under the extended set
        let pos = Pos::new(6, 5);
        let primary = point_score(&board, pos, Stone::Black, DirectionSet::Primary);
        let extended = point_score(&board, pos, Stone::Black, DirectionSet::Extended);
        assert!(
            extended > primary,
            "extended {} should outscore primary {}",
            extended,
            primary
        );
    }
}
