//! Move evaluation for gobang
//!
//! One-ply pattern scoring:
//! - a nine-cell window is read along each direction through a cell
//! - the window is matched against a fixed, ordered template table
//! - offense and defense totals pick the computer's move

pub mod heuristic;
pub mod patterns;
pub mod window;

pub use heuristic::{best_move, point_score};
pub use patterns::{classify, score_window, PatternScore, Shape};
pub use window::{line_window, Token, Window, WINDOW_LEN, WINDOW_RADIUS};
