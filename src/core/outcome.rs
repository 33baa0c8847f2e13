//! Roll outcomes and the per-turn history record.
//!
//! A presentation layer handles exactly three outcomes:
//! - `Moved`: animate the token from `from` to `to`
//! - `Overshoot`: the roll would pass the final cell, the token stays put
//! - `Win`: the token reached the final cell, disable further input

use serde::{Deserialize, Serialize};

use super::board::Redirect;
use super::dice::DieRoll;
use super::player::PlayerId;

/// Result of applying one die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The player moved; `to` already includes any ladder or snake.
    Moved {
        player: PlayerId,
        from: u8,
        to: u8,
        roll: DieRoll,
    },
    /// The roll would have passed the final cell. No movement.
    Overshoot { player: PlayerId, roll: DieRoll },
    /// The player landed exactly on the final cell.
    Win { player: PlayerId, final_roll: DieRoll },
}

impl RollOutcome {
    /// The player who rolled.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            RollOutcome::Moved { player, .. }
            | RollOutcome::Overshoot { player, .. }
            | RollOutcome::Win { player, .. } => player,
        }
    }

    /// The die value that produced this outcome.
    #[must_use]
    pub fn roll(&self) -> DieRoll {
        match *self {
            RollOutcome::Moved { roll, .. } | RollOutcome::Overshoot { roll, .. } => roll,
            RollOutcome::Win { final_roll, .. } => final_roll,
        }
    }

    /// Check whether this outcome ended the game.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, RollOutcome::Win { .. })
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollOutcome::Moved { player, from, to, roll } => {
                write!(f, "{player} rolled {roll}: {from} -> {to}")
            }
            RollOutcome::Overshoot { player, roll } => {
                write!(f, "{player} rolled {roll}: needs an exact roll to finish")
            }
            RollOutcome::Win { player, final_roll } => {
                write!(f, "{player} rolled {final_roll} and wins")
            }
        }
    }
}

/// A committed roll, kept in the state's turn history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// What the roll did.
    pub outcome: RollOutcome,

    /// The ladder or snake taken on this turn, if any.
    pub redirect: Option<Redirect>,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(turn: u32, outcome: RollOutcome, redirect: Option<Redirect>) -> Self {
        Self {
            turn,
            outcome,
            redirect,
        }
    }
}
