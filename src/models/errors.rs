use thiserror::Error;

use super::position::Position;

/// Why a typed position selector was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is too small")]
    TooSmall(String),
    #[error("{0} is too big")]
    TooBig(String),
}

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Selector outside 1-9 or not a number. Recoverable: ask again.
    #[error("Invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
    /// Selected cell already holds a mark. Recoverable: ask again.
    #[error("Position {} is already occupied", .0.id())]
    OccupiedCell(Position),
    /// Operation not allowed in the engine's current state
    #[error("Cannot {action} while the round is {state}")]
    InvalidStateTransition {
        action: &'static str,
        state: &'static str,
    },
    /// I/O error occurred
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GameError {
    /// True for errors the player fixes by entering a different position.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidPosition(_) | GameError::OccupiedCell(_))
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_errors_are_recoverable() {
        assert!(GameError::from(PositionError::TooBig("10".into())).is_recoverable());
        let pos = Position::from_id(5).unwrap();
        assert!(GameError::OccupiedCell(pos).is_recoverable());
    }

    #[test]
    fn state_errors_are_not_recoverable() {
        let err = GameError::InvalidStateTransition {
            action: "submit a move",
            state: "not started",
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Cannot submit a move while the round is not started");
    }

    #[test]
    fn occupied_cell_message_uses_position_id() {
        let pos = Position::from_id(7).unwrap();
        assert_eq!(
            GameError::OccupiedCell(pos).to_string(),
            "Position 7 is already occupied"
        );
    }
}
