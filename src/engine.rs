//! Game facade tying the board, the rules and the evaluator together
//!
//! `Game` owns the board and the turn and drives the computer opponent.
//! The flow mirrors how a round actually goes:
//!
//! 1. **Place**: a move goes down as the current turn's stone
//! 2. **Check**: the caller asks whether that stone just won
//! 3. **Switch**: the turn flips to the other color
//! 4. **Reply**: `ai_move` picks, places and flips in one call
//!
//! # Example
//!
//! ```
//! use gobang::{Game, Pos, Stone};
//!
//! let mut game = Game::new();
//! assert!(game.place(Pos::new(7, 7)));
//! assert!(!game.check_win(Pos::new(7, 7), Stone::Black));
//! game.switch_turn();
//!
//! let reply = game.ai_move().unwrap();
//! assert_eq!(reply.stone, Stone::White);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, DirectionSet, Pos, Stone};
use crate::eval::best_move;
use crate::rules::is_winning_move;

/// How the computer chooses its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiStrategy {
    /// Score every empty cell with the shape table and take the best
    #[default]
    Heuristic,
    /// Pick uniformly among the empty cells
    Random,
}

/// Facade configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length
    pub size: usize,
    /// Directions scanned for scoring and wins
    pub directions: DirectionSet,
    /// How the computer picks its cell
    pub strategy: AiStrategy,
    /// Fixed RNG seed for the random strategy; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Board::DEFAULT_SIZE,
            directions: DirectionSet::Primary,
            strategy: AiStrategy::Heuristic,
            seed: None,
        }
    }
}

/// A completed placement: where and which color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Game facade: board state, turn and the computer opponent.
///
/// Placements never panic; a refused move reports `false` and leaves
/// every piece of state untouched.
pub struct Game {
    board: Board,
    turn: Stone,
    directions: DirectionSet,
    strategy: AiStrategy,
    rng: StdRng,
}

impl Game {
    /// Create a game with default settings: 15x15 board, the classic
    /// four directions, heuristic opponent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a game with custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board: Board::new(config.size),
            turn: Stone::Black,
            directions: config.directions,
            strategy: config.strategy,
            rng,
        }
    }

    /// Reset the board and hand the first move back to Black
    pub fn new_game(&mut self) {
        self.board.clear();
        self.turn = Stone::Black;
        debug!(size = self.board.size(), "board reset");
    }

    /// Read-only view of the board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose turn it is
    #[must_use]
    pub fn current_turn(&self) -> Stone {
        self.turn
    }

    /// Hand the turn to the other color
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Place the current turn's stone at `pos`.
    ///
    /// Returns false and changes nothing when the cell is off the grid
    /// or taken. The turn does not advance: callers first check for a
    /// win with the stone they just placed, then call
    /// [`switch_turn`](Self::switch_turn).
    pub fn place(&mut self, pos: Pos) -> bool {
        self.board.place(pos, self.turn)
    }

    /// Let the computer play one move for the current turn.
    ///
    /// Picks a cell per the configured strategy, places the current
    /// color there, advances the turn and returns the move. `None`
    /// only when the board is already full.
    pub fn ai_move(&mut self) -> Option<Move> {
        if self.board.is_full() {
            return None;
        }
        let stone = self.turn;
        let pos = match self.strategy {
            AiStrategy::Heuristic => best_move(&self.board, stone, self.directions)?,
            AiStrategy::Random => self.random_cell()?,
        };
        let placed = self.board.place(pos, stone);
        debug_assert!(placed, "strategy returned an occupied cell");
        self.switch_turn();
        debug!(row = pos.row, col = pos.col, ?stone, "computer move");
        Some(Move { pos, stone })
    }

    /// Check whether a stone at `pos` completes five in a row
    #[must_use]
    pub fn check_win(&self, pos: Pos, stone: Stone) -> bool {
        is_winning_move(&self.board, pos, stone, self.directions)
    }

    /// Check whether every cell is taken
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    fn random_cell(&mut self) -> Option<Pos> {
        let choices = self.board.empty_positions();
        choices.choose(&mut self.rng).copied()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new();
        assert_eq!(game.board().size(), 15);
        assert_eq!(game.current_turn(), Stone::Black);
        assert!(!game.is_full());
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size, 15);
        assert_eq!(config.directions, DirectionSet::Primary);
        assert_eq!(config.strategy, AiStrategy::Heuristic);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_place_uses_current_turn() {
        let mut game = Game::new();
        assert!(game.place(Pos::new(7, 7)));
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(
            game.current_turn(),
            Stone::Black,
            "placing must not advance the turn"
        );
    }

    #[test]
    fn test_place_rejects_taken_cell() {
        let mut game = Game::new();
        assert!(game.place(Pos::new(7, 7)));
        game.switch_turn();
        assert!(!game.place(Pos::new(7, 7)));
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
    }

    #[test]
    fn test_place_rejects_off_grid() {
        let mut game = Game::new();
        assert!(!game.place(Pos::new(15, 15)));
        assert_eq!(game.board().stone_count(), 0);
    }

    #[test]
    fn test_switch_turn() {
        let mut game = Game::new();
        game.switch_turn();
        assert_eq!(game.current_turn(), Stone::White);
        game.switch_turn();
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_ai_move_plays_current_turn_and_advances() {
        let mut game = Game::new();
        assert!(game.place(Pos::new(7, 7)));
        game.switch_turn();

        let reply = game.ai_move().unwrap();
        assert_eq!(reply.stone, Stone::White);
        assert_eq!(game.board().get(reply.pos), Stone::White);
        assert_eq!(
            game.current_turn(),
            Stone::Black,
            "the computer move hands the turn back"
        );
    }

    #[test]
    fn test_ai_move_as_black() {
        // The computer's color follows the turn; it is not hardwired
        let mut game = Game::new();
        let opening = game.ai_move().unwrap();
        assert_eq!(opening.stone, Stone::Black);
        assert_eq!(game.current_turn(), Stone::White);
    }

    #[test]
    fn test_heuristic_completes_five() {
        let mut game = Game::new();
        for col in 2..6 {
            assert!(game.place(Pos::new(7, col)));
        }
        let mov = game.ai_move().unwrap();
        assert_eq!(mov.pos, Pos::new(7, 1), "first winning end in scan order");
        assert!(game.check_win(mov.pos, mov.stone));
    }

    #[test]
    fn test_check_win_after_fifth_stone() {
        let mut game = Game::new();
        for col in 3..7 {
            assert!(game.place(Pos::new(7, col)));
            assert!(!game.check_win(Pos::new(7, col), Stone::Black));
            game.switch_turn();
            assert!(game.place(Pos::new(0, col)));
            game.switch_turn();
        }
        assert!(game.place(Pos::new(7, 7)));
        assert!(game.check_win(Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut game = Game::with_config(GameConfig {
            size: 2,
            ..Default::default()
        });
        while game.ai_move().is_some() {}
        assert!(game.is_full());
        assert!(game.ai_move().is_none());
    }

    #[test]
    fn test_random_strategy_is_seeded() {
        let config = GameConfig {
            strategy: AiStrategy::Random,
            seed: Some(42),
            ..Default::default()
        };
        let mut a = Game::with_config(config);
        let mut b = Game::with_config(config);
        for _ in 0..10 {
            assert_eq!(a.ai_move(), b.ai_move());
        }
    }

    #[test]
    fn test_random_strategy_fills_the_board() {
        let mut game = Game::with_config(GameConfig {
            size: 4,
            strategy: AiStrategy::Random,
            seed: Some(7),
            ..Default::default()
        });
        for _ in 0..16 {
            let mov = game.ai_move().unwrap();
            assert!(mov.pos.row < 4 && mov.pos.col < 4);
        }
        assert!(game.is_full());
        assert!(game.ai_move().is_none());
    }

    #[test]
    fn test_new_game_resets() {
        let mut game = Game::new();
        assert!(game.place(Pos::new(7, 7)));
        game.switch_turn();
        game.new_game();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_extended_directions_reach_knight_wins() {
        let mut game = Game::with_config(GameConfig {
            directions: DirectionSet::Extended,
            ..Default::default()
        });
        for step in 0..5u8 {
            assert!(game.place(Pos::new(step, step * 2)));
        }
        assert!(game.check_win(Pos::new(4, 8), Stone::Black));

        let mut plain = Game::new();
        for step in 0..5u8 {
            assert!(plain.place(Pos::new(step, step * 2)));
        }
        assert!(!plain.check_win(Pos::new(4, 8), Stone::Black));
    }

    #[test]
    fn test_default_game() {
        let game = Game::default();
        assert_eq!(game.current_turn(), Stone::Black);
    }
}
