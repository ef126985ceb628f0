//! Tic-tac-toe self-play simulator.
//!
//! - [`core`]: board model, moves and marks
//! - [`player`]: players and the random, informed and smart strategies
//! - [`game`]: the turn-by-turn state machine
//! - [`selfplay`]: many-game statistics, optionally in parallel

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod player;
pub mod selfplay;


pub use error::{BoardError, GameError};
