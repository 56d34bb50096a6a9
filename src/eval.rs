//! Static heuristic evaluation for the decision engine.
//!
//! The evaluator scores a board from the point of view of one seat by
//! summing a per-line score over the 8 winning lines. The accumulation
//! rule is hand-tuned and asymmetric; the engine's move choices depend
//! on reproducing it exactly, so the cell-by-cell branches below mirror
//! the reference behavior rather than a cleaner win/draw/loss scheme.

use crate::position::Position;
use crate::rules::win::LINES;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Heuristic evaluation of the board for the given seat.
///
/// Higher values favor `seat`, lower (more negative) values favor the
/// opponent. The empty board scores 0; a completed line for `seat`
/// contributes 100.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, seat: Player) -> i32 {
    LINES.iter().map(|line| line_score(board, *line, seat)).sum()
}

/// Scores one line of three cells, scanned in first/second/third order.
///
/// Running score after each cell:
/// - one mark on the line: +1 for `seat`, -1 for the opponent;
/// - a second agreeing mark multiplies the magnitude by 10;
/// - any disagreement kills the line (no one can complete it): 0.
///
/// The third-cell opponent branch keeps the reference quirk: a line
/// holding one seat mark, one empty, then an opponent mark scores -1,
/// not 0 (`score > 1` guard, not `score >= 1`).
fn line_score(board: &Board, line: [Position; 3], seat: Player) -> i32 {
    let own = Square::Occupied(seat);
    let opp = Square::Occupied(seat.opponent());
    let mut score = 0;

    // First cell
    let first = board.get(line[0]);
    if first == own {
        score = 1;
    } else if first == opp {
        score = -1;
    }

    // Second cell
    let second = board.get(line[1]);
    if second == own {
        if score == 1 {
            score = 10;
        } else if score == -1 {
            return 0;
        } else {
            score = 1;
        }
    } else if second == opp {
        if score == -1 {
            score = -10;
        } else if score == 1 {
            return 0;
        } else {
            score = -1;
        }
    }

    // Third cell
    let third = board.get(line[2]);
    if third == own {
        if score > 0 {
            score *= 10;
        } else if score < 0 {
            return 0;
        } else {
            score = 1;
        }
    } else if third == opp {
        if score < 0 {
            score *= 10;
        } else if score > 1 {
            return 0;
        } else {
            score = -1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, pos: Position, player: Player) {
        board.set(pos, Square::Occupied(player));
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::X), 0);
        assert_eq!(evaluate(&board, Player::O), 0);
    }

    #[test]
    fn test_completed_own_row_scores_105() {
        // X X X on the top row, rest empty: the row contributes 100 and
        // each of the five other lines touching it contributes 1.
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopCenter, Player::X);
        place(&mut board, Position::TopRight, Player::X);
        assert_eq!(evaluate(&board, Player::X), 105);
        assert_eq!(evaluate(&board, Player::O), -105);
    }

    #[test]
    fn test_two_agreeing_marks_score_ten() {
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopCenter, Player::X);
        // Top row 10, col 0 + col 1 + main diagonal 1 each.
        assert_eq!(evaluate(&board, Player::X), 13);
    }

    #[test]
    fn test_contested_line_is_dead() {
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopCenter, Player::O);
        place(&mut board, Position::TopRight, Player::X);
        // Top row is dead. X keeps col 0, col 2, both diagonals (+4);
        // O keeps col 1 (-1).
        assert_eq!(evaluate(&board, Player::X), 3);
    }

    #[test]
    fn test_third_cell_opponent_quirk() {
        // X _ O on the top row: the reference accumulation scores this
        // line -1 rather than 0 (the third-cell guard is score > 1).
        let mut board = Board::new();
        place(&mut board, Position::TopLeft, Player::X);
        place(&mut board, Position::TopRight, Player::O);
        assert_eq!(line_score(&board, LINES[0], Player::X), -1);
    }

    #[test]
    fn test_corner_versus_center_reply() {
        // X corner answered by O center evaluates to -1 for X; X center
        // answered by O corner evaluates to +1. These two positions pin
        // the engine's preference for the center at two-ply depth.
        let mut corner = Board::new();
        place(&mut corner, Position::TopLeft, Player::X);
        place(&mut corner, Position::Center, Player::O);
        assert_eq!(evaluate(&corner, Player::X), -1);

        let mut center = Board::new();
        place(&mut center, Position::Center, Player::X);
        place(&mut center, Position::TopLeft, Player::O);
        assert_eq!(evaluate(&center, Player::X), 1);
    }
}
