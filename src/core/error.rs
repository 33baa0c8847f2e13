//! Game errors surfaced by the roll resolver.
//!
//! Board table problems are configuration errors and live in
//! [`BoardConfigError`](super::config::BoardConfigError) instead.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Errors raised while applying a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameError {
    /// A die value outside 1..=6 was supplied.
    InvalidRollValue { value: i64 },
    /// A roll was requested after the game already has a winner.
    GameAlreadyFinished { winner: PlayerId },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidRollValue { value } => {
                write!(f, "invalid roll value {value}: a die shows 1 to 6")
            }
            GameError::GameAlreadyFinished { winner } => {
                write!(f, "game already finished: {winner} won")
            }
        }
    }
}

impl std::error::Error for GameError {}
