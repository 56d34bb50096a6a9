//! Game state machine for tic-tac-toe.
//!
//! The game is a collaborator of the decision engine, not part of it: a
//! frontend applies human and engine moves here and reads the status
//! after each one. The engine itself never touches this module.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state, driven by [`Game::make_move`] calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Move history in play order.
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move and returns the resulting status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn make_move(&mut self, mov: Move) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if mov.player() != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player()));
        }
        if !self.board.is_empty(mov.position()) {
            return Err(MoveError::SquareOccupied(mov.position()));
        }

        self.board
            .set(mov.position(), Square::Occupied(mov.player()));
        self.history.push(mov);
        self.update_status();

        if self.status == GameStatus::InProgress {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.status)
    }

    /// Legal positions for the player to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Resets for a new round: board cleared, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Re-derives the status from the board after a move.
    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
