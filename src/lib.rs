//! Noughts & Crosses
//!
//! A two-player noughts & crosses (tic-tac-toe) game for the terminal.
//!
//! # Overview
//!
//! The engine is plain, synchronous state: a 3x3 board, a turn engine that
//! validates moves and detects wins and draws, and a session that keeps
//! score across rounds. All rendering and prompting lives in separate
//! layers that only read engine state.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn sequencing and round state machine
//! - [`models`] - Domain models (Board, Position, Player, errors)
//! - [`services`] - Win/draw detection, session scoreboard, interactive loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presenters and colour theme
//! - [`cli`] - Command-line options
//!
//! # Example
//!
//! ```rust
//! use noughts::{GameState, Outcome, Session};
//!
//! let mut session = Session::new(42);
//! let first = session.start_round().unwrap();
//! for id in [1, 2, 4, 5] {
//!     session.submit_move(id).unwrap();
//! }
//! let state = session.submit_move(7).unwrap();
//! assert_eq!(state, GameState::Finished(Outcome::Win(first)));
//! assert_eq!(session.player(first).wins(), 1);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState, Outcome};
pub use models::board::{Board, Cell};
pub use models::errors::{GameError, GameResult, PositionError};
pub use models::player::{Player, PlayerId};
pub use models::position::Position;
pub use services::detector::Evaluation;
pub use services::session::{Leader, Session};
