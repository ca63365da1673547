//! Turn engine
//!
//! Runs a single round at a time: picks who moves first, validates and
//! applies moves, and decides when the round is over. The engine owns the
//! board and the random source; it knows nothing about names or scores.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::models::board::Board;
use crate::models::errors::{GameError, GameResult};
use crate::models::player::PlayerId;
use crate::models::position::Position;
use crate::services::detector::{self, Evaluation};

/// Core game engine that sequences turns and detects the end of a round
pub struct GameEngine {
    board: Board,
    state: GameState,
    current: Option<PlayerId>,
    moves_played: usize,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

impl GameState {
    pub fn label(&self) -> &'static str {
        match self {
            GameState::NotStarted => "not started",
            GameState::InProgress => "in progress",
            GameState::Finished(_) => "finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

impl GameEngine {
    /// Creates an engine with no round in progress
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for first-player selection
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            state: GameState::NotStarted,
            current: None,
            moves_played: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player to move, or None before the first round has started
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// How the round ended, if it has
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Begins a new round on an empty board
    ///
    /// The first mover is drawn uniformly from both players.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if a round is already in progress.
    pub fn start_round(&mut self) -> GameResult<PlayerId> {
        if self.state == GameState::InProgress {
            return Err(self.transition_error("start a round"));
        }

        self.board.reset();
        self.moves_played = 0;
        let first = if self.rng.gen_bool(0.5) {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        self.current = Some(first);
        self.state = GameState::InProgress;

        info!(first = %first, "round started");
        Ok(first)
    }

    /// Places the current player's mark at a 1-9 position id
    ///
    /// # Returns
    ///
    /// The state after the move: still `InProgress` (turn passed to the
    /// other player) or `Finished` with the outcome.
    ///
    /// # Errors
    ///
    /// * `InvalidPosition` - id outside 1-9
    /// * `OccupiedCell` - the cell already holds a mark
    /// * `InvalidStateTransition` - no round in progress
    ///
    /// A rejected move changes nothing.
    pub fn submit_move(&mut self, position_id: i64) -> GameResult<GameState> {
        let player = match (self.state, self.current) {
            (GameState::InProgress, Some(player)) => player,
            _ => return Err(self.transition_error("submit a move")),
        };

        let pos = Position::from_id(position_id).inspect_err(|err| {
            debug!(position_id, %err, "move rejected");
        })?;
        self.board.place(pos, player).inspect_err(|err| {
            debug!(position_id, %err, "move rejected");
        })?;
        self.moves_played += 1;
        debug!(player = %player, position_id, moves = self.moves_played, "move accepted");

        match detector::evaluate(&self.board, player) {
            Evaluation::Win(winner) => {
                self.state = GameState::Finished(Outcome::Win(winner));
                info!(winner = %winner, moves = self.moves_played, "round won");
            }
            Evaluation::Draw => {
                self.state = GameState::Finished(Outcome::Draw);
                info!(moves = self.moves_played, "round drawn");
            }
            Evaluation::Ongoing => {
                self.current = Some(player.other());
            }
        }

        Ok(self.state)
    }

    fn transition_error(&self, action: &'static str) -> GameError {
        GameError::InvalidStateTransition {
            action,
            state: self.state.label(),
        }
    }
}
