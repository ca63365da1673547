//! Win and draw detection
//!
//! Lines are checked only for the mark of the player who just moved: a move
//! can complete a line for its own mark and nobody else's.

use tracing::instrument;

use crate::models::board::{Board, Cell};
use crate::models::constants::{Line, WINNING_LINES};
use crate::models::player::PlayerId;

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Ongoing,
    Win(PlayerId),
    Draw,
}

/// First line fully held by `player`, if any.
pub fn winning_line(board: &Board, player: PlayerId) -> Option<Line> {
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&i| cells[i] == Cell::Marked(player)))
        .copied()
}

pub fn has_won(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}

/// Board full with no line for either mark.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && PlayerId::ALL.iter().all(|&p| !has_won(board, p))
}

/// Evaluate the board after `mover` placed a mark. Win is checked first, so
/// a full board that also completes a line is a win.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, mover: PlayerId) -> Evaluation {
    if has_won(board, mover) {
        return Evaluation::Win(mover);
    }
    if board.is_full() {
        return Evaluation::Draw;
    }
    Evaluation::Ongoing
}
