//! Domain models
//!
//! This module contains the domain models of the game: the board and its
//! cells, positions, players and the error type. Models are plain data
//! with only the logic needed to keep them valid.

pub mod board;
pub mod constants;
pub mod errors;
pub mod player;
pub mod position;
