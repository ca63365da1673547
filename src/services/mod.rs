//! Game services
//!
//! This module contains the game logic built on the models: win/draw
//! detection, the session scoreboard and the interactive game loop.

pub mod detector;
pub mod game;
pub mod session;
