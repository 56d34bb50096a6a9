//! Noughts - tic-tac-toe board model and decision engine
//!
//! This library provides the in-process core of a 3x3 tic-tac-toe player:
//!
//! - **Board model**: marks, positions, win/draw queries, legal-move listing
//! - **Decision engine**: depth-bounded minimax with alpha-beta pruning over
//!   an in-place mutate/undo board, backed by a hand-tuned static evaluator
//! - **Game**: an explicit state machine (`InProgress` / `Won` / `Draw`)
//!   driven by external calls after each move
//!
//! Rendering, input handling, and score bookkeeping are presentation
//! concerns that live outside this crate; a frontend consumes the contracts
//! exported here once per turn.
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Minimax, Move, Player, Position};
//!
//! # fn example() -> Result<(), noughts::MoveError> {
//! let mut game = Game::new();
//! game.make_move(Move::new(Player::X, Position::Center))?;
//!
//! // The engine answers for O with two plies of look-ahead.
//! let engine = Minimax::default();
//! if let Some(pos) = engine.best_move(game.board(), Player::O) {
//!     game.make_move(Move::new(Player::O, pos))?;
//! }
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod eval;
mod game;
mod position;
mod rules;
mod types;

// Crate-level exports - board model
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - moves and validation
pub use action::{Move, MoveError};

// Crate-level exports - rules
pub use rules::{check_winner, has_line, is_full};

// Crate-level exports - decision engine
pub use engine::Minimax;
pub use eval::evaluate;

// Crate-level exports - game state machine
pub use game::{Game, GameStatus};
