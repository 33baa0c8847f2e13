//! Core engine types: players, dice, RNG, board, outcomes, state, errors.
//!
//! Everything here is plain data. The only logic beyond validation is
//! [`Board::resolve`]; roll application lives in [`rules`](crate::rules).

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod board;
pub mod outcome;
pub mod state;
pub mod error;

pub use player::{InvalidPlayerId, PlayerId, PlayerPair, PLAYER_COUNT};
pub use dice::DieRoll;
pub use rng::{GameRng, GameRngState};
pub use config::{BoardConfig, BoardConfigError, FINAL_CELL, START_CELL, STANDARD_LADDERS, STANDARD_SNAKES};
pub use board::{Board, Connectors, Redirect, RedirectKind};
pub use outcome::{RollOutcome, TurnRecord};
pub use state::{GameState, GameStatus};
pub use error::GameError;
