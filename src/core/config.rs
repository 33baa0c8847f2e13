//! Board configuration.
//!
//! Games configure the board at startup by providing a `BoardConfig`: the
//! ladder and snake tables, each mapping a trigger cell to a destination
//! cell. The tables are checked once, when a [`Board`](super::board::Board)
//! is built from them; a bad table is a startup error, never a game error.

use serde::{Deserialize, Serialize};

/// Number of cells on the board. Cells are numbered 1 through `FINAL_CELL`.
pub const FINAL_CELL: u8 = 100;

/// Position of a player who has not yet entered the board.
pub const START_CELL: u8 = 0;

/// Standard ladder table: trigger → destination.
pub const STANDARD_LADDERS: [(u8, u8); 4] = [(6, 25), (11, 35), (40, 65), (60, 85)];

/// Standard snake table: trigger → destination.
pub const STANDARD_SNAKES: [(u8, u8); 4] = [(99, 54), (70, 55), (52, 42), (25, 2)];

/// Unvalidated ladder and snake tables.
///
/// Entries are kept in insertion order. Validation happens in
/// [`Board::new`](super::board::Board::new).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Ladder entries as (trigger, destination).
    #[serde(default)]
    pub ladders: Vec<(u8, u8)>,

    /// Snake entries as (trigger, destination).
    #[serde(default)]
    pub snakes: Vec<(u8, u8)>,
}

impl BoardConfig {
    /// Create an empty configuration (no ladders, no snakes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard four-ladder, four-snake board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ladders: STANDARD_LADDERS.to_vec(),
            snakes: STANDARD_SNAKES.to_vec(),
        }
    }

    /// Add a ladder from `trigger` up to `destination`.
    #[must_use]
    pub fn with_ladder(mut self, trigger: u8, destination: u8) -> Self {
        self.ladders.push((trigger, destination));
        self
    }

    /// Add a snake from `trigger` down to `destination`.
    #[must_use]
    pub fn with_snake(mut self, trigger: u8, destination: u8) -> Self {
        self.snakes.push((trigger, destination));
        self
    }
}

/// Reasons a `BoardConfig` is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardConfigError {
    /// A trigger or destination lies outside 1..=100.
    CellOutOfRange { cell: u8 },
    /// The same cell is listed as a trigger more than once, in either table.
    OverlappingTrigger { cell: u8 },
    /// An entry sends a cell to itself.
    SelfLoop { cell: u8 },
    /// A ladder whose destination is below its trigger.
    LadderGoesDown { trigger: u8, destination: u8 },
    /// A snake whose destination is above its trigger.
    SnakeGoesUp { trigger: u8, destination: u8 },
    /// A trigger on the final cell would make the game unwinnable.
    TriggerOnFinalCell,
}

impl std::fmt::Display for BoardConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardConfigError::CellOutOfRange { cell } => {
                write!(f, "cell {cell} is outside 1..={FINAL_CELL}")
            }
            BoardConfigError::OverlappingTrigger { cell } => {
                write!(f, "cell {cell} is a trigger more than once")
            }
            BoardConfigError::SelfLoop { cell } => {
                write!(f, "cell {cell} redirects to itself")
            }
            BoardConfigError::LadderGoesDown { trigger, destination } => {
                write!(f, "ladder {trigger}->{destination} goes down")
            }
            BoardConfigError::SnakeGoesUp { trigger, destination } => {
                write!(f, "snake {trigger}->{destination} goes up")
            }
            BoardConfigError::TriggerOnFinalCell => {
                write!(f, "cell {FINAL_CELL} cannot be a trigger")
            }
        }
    }
}

impl std::error::Error for BoardConfigError {}
