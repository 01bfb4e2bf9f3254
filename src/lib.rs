//! Gobang (five in a row) with a pattern-scoring computer opponent
//!
//! Freestyle rules on a square grid, 15x15 by default:
//! - Five or more adjacent stones of one color win (overlines count)
//! - No captures, no forbidden moves
//! - The computer answers with a one-ply heuristic: every empty cell
//!   is scored for attack and defense and the best cell is played
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: grid state, positions and scan directions
//! - [`rules`]: win detection around the latest stone
//! - [`eval`]: line windows, shape classification and move scoring
//! - [`engine`]: the `Game` facade gluing the pieces together
//! - [`ui`]: native desktop interface built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Game, Pos, Stone};
//!
//! let mut game = Game::new();
//!
//! // Human opens in the center as Black
//! assert!(game.place(Pos::new(7, 7)));
//! if !game.check_win(Pos::new(7, 7), Stone::Black) {
//!     game.switch_turn();
//! }
//!
//! // The computer answers for White and hands the turn back
//! let reply = game.ai_move().expect("board is not full");
//! println!("computer played ({}, {})", reply.pos.row, reply.pos.col);
//! ```
//!
//! # How the computer picks a cell
//!
//! For every empty cell the engine lays a 9-cell window along each
//! scan direction, once pretending the cell holds its own stone and
//! once pretending it holds the opponent's. Each window is matched
//! against a fixed table of shapes (five, live four, rush four, ...)
//! and the first shape that matches prices the window. The cell with
//! the highest attack plus defense total is played; earlier cells in
//! row-major order win ties.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, DirectionSet, Pos, Stone};
pub use engine::{AiStrategy, Game, GameConfig, Move};
