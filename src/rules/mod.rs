//! Game rules for gobang
//!
//! Freestyle five-in-a-row: whoever lines up five or more of their
//! stones along a scanned direction wins. No captures, no forbidden
//! moves.

pub mod win;

// Re-exports for convenient access
pub use win::{is_winning_move, WIN_LEN};
