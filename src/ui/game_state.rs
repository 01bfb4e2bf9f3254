//! Session state for the desktop interface
//!
//! `GameSession` wraps the engine facade with the bookkeeping the
//! interface needs: whose stones the human plays, how the game ended
//! and what to highlight on the board. The computer answers
//! synchronously, so a session is never waiting on a worker.

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::engine::{Game, Move};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the computer
    PvE { human: Stone },
    /// Two humans sharing the screen
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Stone::Black,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// One game in progress: engine state plus interface bookkeeping
pub struct GameSession {
    game: Game,
    pub mode: GameMode,
    pub outcome: Option<Outcome>,
    pub last_move: Option<Move>,
    pub message: Option<String>,
}

impl GameSession {
    /// Start a session. When the computer holds Black it opens
    /// immediately.
    pub fn new(mode: GameMode) -> Self {
        let mut session = Self {
            game: Game::new(),
            mode,
            outcome: None,
            last_move: None,
            message: None,
        };
        info!(?mode, "session started");
        session.computer_reply();
        session
    }

    /// Wipe the board and start over in the same mode
    pub fn reset(&mut self) {
        self.game.new_game();
        self.outcome = None;
        self.last_move = None;
        self.message = None;
        self.computer_reply();
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Color whose turn it is
    pub fn current_turn(&self) -> Stone {
        self.game.current_turn()
    }

    /// Check if the human may move right now
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.game.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if the computer owns the current turn
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.game.current_turn() != human,
            GameMode::PvP => false,
        }
    }

    /// Attempt to place a stone for the human at the given position.
    ///
    /// On success the computer answers in the same call when the mode
    /// gives it the next turn.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("The computer moves for this color".to_string());
        }

        let stone = self.game.current_turn();
        if !self.game.place(pos) {
            return Err("Cell is taken".to_string());
        }

        self.record_move(Move { pos, stone });
        if self.outcome.is_none() {
            self.game.switch_turn();
            self.computer_reply();
        }
        Ok(())
    }

    /// Record a completed placement and settle the game if it ended.
    /// The turn is left with the mover; callers switch it when play
    /// continues.
    fn record_move(&mut self, mov: Move) {
        self.last_move = Some(mov);
        self.message = None;

        if self.game.check_win(mov.pos, mov.stone) {
            self.outcome = Some(Outcome::Win(mov.stone));
            info!(winner = ?mov.stone, "five in a row");
        } else if self.game.is_full() {
            self.outcome = Some(Outcome::Draw);
            info!("board full, draw");
        }
    }

    /// Let the computer move if the turn is its
    fn computer_reply(&mut self) {
        if self.outcome.is_some() || !self.is_computer_turn() {
            return;
        }

        // ai_move places and advances the turn itself; only the win
        // and draw bookkeeping is left to do here.
        if let Some(mov) = self.game.ai_move() {
            self.last_move = Some(mov);
            if self.game.check_win(mov.pos, mov.stone) {
                self.outcome = Some(Outcome::Win(mov.stone));
                info!(winner = ?mov.stone, "five in a row");
            } else if self.game.is_full() {
                self.outcome = Some(Outcome::Draw);
                info!("board full, draw");
            }
        }
    }
}
