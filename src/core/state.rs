//! Game state: both token positions, whose turn it is, and whether the
//! game is over.
//!
//! `GameState` is a plain value. The resolver takes one by reference and
//! returns a new one, so a caller always holds either the old state or the
//! fully committed new state, never something in between.
//!
//! The turn history uses `im::Vector` so cloning a state for each roll
//! stays O(1) regardless of game length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{FINAL_CELL, START_CELL};
use super::outcome::{RollOutcome, TurnRecord};
use super::player::{PlayerId, PlayerPair};

/// The two states of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Rolls are accepted.
    #[default]
    InProgress,
    /// Terminal: `winner` reached the final cell.
    Finished { winner: PlayerId },
}

/// Complete state of one game session.
///
/// Deserialization in any serde format runs the same consistency checks as
/// [`from_bytes`](Self::from_bytes), so a decoded state is always one the
/// resolver can accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) positions: PlayerPair<u8>,
    pub(crate) current_player: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<TurnRecord>,
}

impl GameState {
    /// Create the initial state.
    ///
    /// ## Defaults
    ///
    /// - both positions at 0 (off the board)
    /// - current player: `PlayerId::FIRST`
    /// - in progress, empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: PlayerPair::with_value(START_CELL),
            current_player: PlayerId::FIRST,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    /// Place a player's token on `cell`.
    ///
    /// Intended for setting up positions mid-game (tests, tutorials,
    /// scripted replays). Panics if `cell` is not below the final cell or
    /// if the game is already finished.
    #[must_use]
    pub fn with_position(mut self, player: PlayerId, cell: u8) -> Self {
        assert!(!self.is_finished(), "Cannot move a token after the game has finished");
        assert!(cell < FINAL_CELL, "Position must be below the final cell");
        self.positions[player] = cell;
        self
    }

    /// Hand the turn to `player`.
    #[must_use]
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    // === Queries ===

    /// Both positions in seat order.
    #[must_use]
    pub fn positions(&self) -> [u8; 2] {
        *self.positions.as_array()
    }

    /// One player's position. 0 means not yet on the board.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> u8 {
        self.positions[player]
    }

    /// The player whose roll is next.
    ///
    /// After a win this stays on the winner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    /// The winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Number of rolls committed so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.history.len() as u32
    }

    /// Every committed roll, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The most recent outcome.
    #[must_use]
    pub fn last_outcome(&self) -> Option<RollOutcome> {
        self.history.back().map(|record| record.outcome)
    }

    // === Snapshots ===

    /// Encode this state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a state produced by [`to_bytes`](Self::to_bytes).
    ///
    /// Rejects snapshots whose positions lie past the final cell or whose
    /// status disagrees with the positions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    fn check_consistency(&self) -> Result<(), String> {
        for (player, &cell) in self.positions.iter() {
            if cell > FINAL_CELL {
                return Err(format!("{player} is on cell {cell}, past the final cell"));
            }
            let finished_here = self.winner() == Some(player);
            if (cell == FINAL_CELL) != finished_here {
                return Err(format!("{player} on cell {cell} disagrees with status {:?}", self.status));
            }
        }
        if let Some(winner) = self.winner() {
            if self.current_player != winner {
                return Err(format!("{winner} won but {} is to roll", self.current_player));
            }
        }
        Ok(())
    }
}

/// Wire form of [`GameState`] before validation.
#[derive(Deserialize)]
struct RawGameState {
    positions: PlayerPair<u8>,
    current_player: PlayerId,
    status: GameStatus,
    history: Vector<TurnRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            positions: raw.positions,
            current_player: raw.current_player,
            status: raw.status,
            history: raw.history,
        };
        state.check_consistency()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
