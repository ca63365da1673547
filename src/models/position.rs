use std::num::IntErrorKind;

use super::constants::{BOARD_SIZE, MAX_POSITION_ID, MIN_POSITION_ID};
use super::errors::{GameResult, PositionError};

/// A cell on the 3x3 board.
/// Values range 0-2. (0,0) is upper-left, (2,2) is lower-right.
/// Row increases top-to-bottom, col increases left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Build a position from 0-based coordinates. Returns None off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Map a player-facing id onto the board: 1 -> (0,0), 2 -> (0,1), ... 9 -> (2,2).
    pub fn from_id(id: i64) -> GameResult<Self> {
        if id < MIN_POSITION_ID {
            return Err(PositionError::TooSmall(id.to_string()).into());
        }
        if id > MAX_POSITION_ID {
            return Err(PositionError::TooBig(id.to_string()).into());
        }
        Ok(Self::from_index((id - MIN_POSITION_ID) as usize))
    }

    /// Position for a row-major flattened index (0-8). Panics off the board.
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index < BOARD_SIZE * BOARD_SIZE, "cell index {index} off the board");
        Position {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index into the flattened board (0-8).
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Player-facing id (1-9).
    pub fn id(&self) -> i64 {
        self.index() as i64 + MIN_POSITION_ID
    }

    /// All nine positions in id order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position::from_index)
    }
}

/// Syntactic check of a typed selector. Range is left to [`Position::from_id`],
/// except for numbers too large to hold at all.
pub fn parse_position_id(input: &str) -> GameResult<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|err| {
        let text = trimmed.to_string();
        match err.kind() {
            IntErrorKind::PosOverflow => PositionError::TooBig(text),
            IntErrorKind::NegOverflow => PositionError::TooSmall(text),
            _ => PositionError::NotANumber(text),
        }
        .into()
    })
}
