//! Desktop interface for the gobang engine
//!
//! Native GUI built with egui/eframe. The computer replies
//! synchronously inside the click handler, so there is no worker
//! thread to poll.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GobangApp;
pub use game_state::{GameMode, GameSession, Outcome};
