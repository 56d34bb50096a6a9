//! Decision engine: depth-bounded minimax with alpha-beta pruning.
//!
//! The engine explores the move tree on a single scratch board, placing a
//! mark before each recursive call and restoring the square afterwards on
//! every exit path, so no per-node board allocation takes place. Moves are
//! generated in row-major order and a later move only displaces the
//! recorded best move on a strictly better score, which biases the engine
//! toward the earliest move among equally scored candidates.

use crate::eval::evaluate;
use crate::position::Position;
use crate::rules::win::has_line;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Result of one recursive search step.
///
/// `choice` is `None` at terminal and depth-cutoff nodes, where the step
/// evaluated the board without selecting a move.
#[derive(Debug, Clone, Copy)]
struct SearchResult {
    score: i32,
    choice: Option<Position>,
}

/// Fixed-depth minimax engine.
///
/// The default look-ahead of 2 plies reproduces the reference behavior:
/// the engine inspects only its own move and one reply, then falls back
/// on the static evaluator. This is a deliberate strength/performance
/// trade-off, not an oversight - raising the depth changes move choices
/// and is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    depth: u8,
}

impl Minimax {
    /// Creates an engine with the given look-ahead depth in plies.
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Returns the configured look-ahead depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns the best legal move for `seat`, or `None` on a full board.
    ///
    /// The input board is never mutated: the search runs on a scratch
    /// copy, which the mutate/undo discipline restores exactly between
    /// moves. Repeated calls on identical input return the identical
    /// position.
    #[instrument(skip(board))]
    pub fn best_move(&self, board: &Board, seat: Player) -> Option<Position> {
        let mut scratch = board.clone();
        let result = search(&mut scratch, seat, seat, self.depth, i32::MIN, i32::MAX);
        debug_assert_eq!(&scratch, board, "search must restore the board");

        if let Some(pos) = result.choice {
            debug!(position = %pos, score = result.score, "engine chose move");
            return Some(pos);
        }

        // The search reports no choice only when the root itself was
        // terminal or cut off at depth 0; fall back to the first empty
        // square in row-major order. Unreachable at depth >= 1, kept
        // as the reference keeps it.
        let fallback = Position::ALL
            .iter()
            .copied()
            .find(|pos| board.is_empty(*pos));
        if let Some(pos) = fallback {
            debug!(position = %pos, "no search choice, taking first empty square");
        }
        fallback
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Legal moves for the position, or the empty list at game over.
///
/// A position where either seat already holds a line has no next moves,
/// which is what terminates the recursion before the depth cutoff.
fn generate_moves(board: &Board, seat: Player) -> Vec<Position> {
    if has_line(board, seat) || has_line(board, seat.opponent()) {
        return Vec::new();
    }
    Position::valid_moves(board)
}

/// Recursive minimax step with an (alpha, beta) pruning window.
///
/// `seat` is the maximizing player throughout the tree; `to_move` flips
/// between calls. Strictly-greater / strictly-smaller comparisons keep
/// the first explored move on ties, and the cutoff check runs after the
/// undo so the board is restored on every path.
fn search(
    board: &mut Board,
    seat: Player,
    to_move: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    let moves = generate_moves(board, seat);
    if moves.is_empty() || depth == 0 {
        return SearchResult {
            score: evaluate(board, seat),
            choice: None,
        };
    }

    let mut choice = None;
    for pos in moves {
        board.set(pos, Square::Occupied(to_move));
        let reply = search(board, seat, to_move.opponent(), depth - 1, alpha, beta);
        board.set(pos, Square::Empty);

        if to_move == seat {
            if reply.score > alpha {
                alpha = reply.score;
                choice = Some(pos);
            }
        } else if reply.score < beta {
            beta = reply.score;
            choice = Some(pos);
        }

        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        score: if to_move == seat { alpha } else { beta },
        choice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, pos: Position, player: Player) {
        board.set(pos, Square::Occupied(player));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopCenter, Player::X);
        place(&mut board, Position::TopRight, Player::X);
        assert!(generate_moves(&board, Player::O).is_empty());
        assert!(generate_moves(&board, Player::X).is_empty());
    }

    #[test]
    fn test_moves_are_row_major() {
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        let moves = generate_moves(&board, Player::X);
        assert_eq!(moves.first(), Some(&Position::TopCenter));
        assert_eq!(moves.last(), Some(&Position::BottomRight));
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for pos in Position::ALL {
            place(&mut board, pos, Player::X);
        }
        assert_eq!(Minimax::default().best_move(&board, Player::O), None);
    }

    #[test]
    fn test_depth_zero_falls_back_to_first_empty() {
        // At depth 0 the root evaluates immediately and records no
        // choice, exercising the defensive fallback path.
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        let engine = Minimax::new(0);
        assert_eq!(engine.best_move(&board, Player::O), Some(Position::TopCenter));
    }

    #[test]
    fn test_takes_immediate_win_at_depth_one() {
        // O O _ on the middle row: depth 1 is enough to complete it.
        let mut board = Board::new();
        place(&mut board, Position::MiddleLeft, Player::O);
        place(&mut board, Position::Center, Player::O);
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopCenter, Player::X);
        let engine = Minimax::new(1);
        assert_eq!(engine.best_move(&board, Player::O), Some(Position::MiddleRight));
    }
}
