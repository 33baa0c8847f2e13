//! Validated board: the 100-cell track plus its ladder and snake tables.
//!
//! ## Resolution
//!
//! A landing cell is resolved in a single pass. Ladders are checked before
//! snakes, and the destination of a redirect is never looked up again, so
//! a ladder that ends on a snake's trigger cell (6→25 and 25→2 on the
//! standard board) stops at the ladder's top.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{BoardConfig, BoardConfigError, FINAL_CELL, STANDARD_LADDERS, STANDARD_SNAKES};

/// Which table a redirect came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectKind {
    Ladder,
    Snake,
}

/// A single ladder or snake: landing on `from` moves the player to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub from: u8,
    pub to: u8,
}

impl std::fmt::Display for Redirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            RedirectKind::Ladder => "ladder",
            RedirectKind::Snake => "snake",
        };
        write!(f, "{} {}->{}", kind, self.from, self.to)
    }
}

/// Connector list sized for typical boards without heap allocation.
pub type Connectors = SmallVec<[Redirect; 8]>;

/// A board whose tables passed validation.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{Board, BoardConfig};
///
/// let board = Board::new(BoardConfig::standard()).unwrap();
/// assert_eq!(board.resolve(40).0, 65);
/// assert_eq!(board.resolve(41).0, 41);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    ladders: FxHashMap<u8, u8>,
    snakes: FxHashMap<u8, u8>,
}

impl Board {
    /// Validate `config` and build a board from it.
    pub fn new(config: BoardConfig) -> Result<Self, BoardConfigError> {
        let mut ladders = FxHashMap::default();
        let mut snakes = FxHashMap::default();

        for &(trigger, destination) in &config.ladders {
            check_entry(trigger, destination)?;
            if destination < trigger {
                return Err(BoardConfigError::LadderGoesDown { trigger, destination });
            }
            if ladders.insert(trigger, destination).is_some() {
                return Err(BoardConfigError::OverlappingTrigger { cell: trigger });
            }
        }

        for &(trigger, destination) in &config.snakes {
            check_entry(trigger, destination)?;
            if destination > trigger {
                return Err(BoardConfigError::SnakeGoesUp { trigger, destination });
            }
            if ladders.contains_key(&trigger) || snakes.insert(trigger, destination).is_some() {
                return Err(BoardConfigError::OverlappingTrigger { cell: trigger });
            }
        }

        Ok(Self { ladders, snakes })
    }

    /// The standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ladders: STANDARD_LADDERS.into_iter().collect(),
            snakes: STANDARD_SNAKES.into_iter().collect(),
        }
    }

    /// Resolve a landing cell, returning the final cell and the redirect taken.
    ///
    /// Ladders take precedence over snakes. No chaining.
    #[must_use]
    pub fn resolve(&self, cell: u8) -> (u8, Option<Redirect>) {
        match self.redirect_at(cell) {
            Some(redirect) => (redirect.to, Some(redirect)),
            None => (cell, None),
        }
    }

    /// The redirect triggered by landing on `cell`, if any.
    #[must_use]
    pub fn redirect_at(&self, cell: u8) -> Option<Redirect> {
        if let Some(&to) = self.ladders.get(&cell) {
            return Some(Redirect { kind: RedirectKind::Ladder, from: cell, to });
        }
        self.snakes
            .get(&cell)
            .map(|&to| Redirect { kind: RedirectKind::Snake, from: cell, to })
    }

    /// Check whether `cell` triggers a ladder or a snake.
    #[must_use]
    pub fn is_trigger(&self, cell: u8) -> bool {
        self.ladders.contains_key(&cell) || self.snakes.contains_key(&cell)
    }

    /// All ladders, sorted by trigger cell.
    #[must_use]
    pub fn ladders(&self) -> Connectors {
        sorted(&self.ladders, RedirectKind::Ladder)
    }

    /// All snakes, sorted by trigger cell.
    #[must_use]
    pub fn snakes(&self) -> Connectors {
        sorted(&self.snakes, RedirectKind::Snake)
    }

    /// Every ladder and snake, sorted by trigger cell.
    #[must_use]
    pub fn connectors(&self) -> Connectors {
        let mut all = self.ladders();
        all.extend(self.snakes());
        all.sort_unstable_by_key(|r| r.from);
        all
    }

    /// The configuration this board was built from, in trigger order.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            ladders: self.ladders().iter().map(|r| (r.from, r.to)).collect(),
            snakes: self.snakes().iter().map(|r| (r.from, r.to)).collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_entry(trigger: u8, destination: u8) -> Result<(), BoardConfigError> {
    for cell in [trigger, destination] {
        if !(1..=FINAL_CELL).contains(&cell) {
            return Err(BoardConfigError::CellOutOfRange { cell });
        }
    }
    if trigger == FINAL_CELL {
        return Err(BoardConfigError::TriggerOnFinalCell);
    }
    if trigger == destination {
        return Err(BoardConfigError::SelfLoop { cell: trigger });
    }
    Ok(())
}

fn sorted(table: &FxHashMap<u8, u8>, kind: RedirectKind) -> Connectors {
    let mut out: Connectors = table
        .iter()
        .map(|(&from, &to)| Redirect { kind, from, to })
        .collect();
    out.sort_unstable_by_key(|r| r.from);
    out
}
