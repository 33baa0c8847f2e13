//! # snakes-ladders
//!
//! A two-player snakes and ladders engine with a pure roll resolver.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: `GameState` is passed into the resolver and a
//!    new one comes out. Nothing is bound to a UI.
//!
//! 2. **Dice are separate from rules**: `apply_roll` takes the die value as
//!    input. Randomness lives in `GameRng` and reaches the rules only via
//!    `roll_dice`.
//!
//! 3. **Tables are validated once**: ladder and snake tables are checked
//!    when a `Board` is built. A bad table is a startup error.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::core::{Board, DieRoll, PlayerId, RollOutcome};
//! use snakes_ladders::rules::{apply_roll, new_game};
//!
//! let board = Board::standard();
//! let roll = DieRoll::new(6).unwrap();
//! let (state, outcome) = apply_roll(&board, &new_game(), roll).unwrap();
//!
//! // Cell 6 is the foot of a ladder to 25.
//! assert_eq!(outcome, RollOutcome::Moved { player: PlayerId::FIRST, from: 0, to: 25, roll });
//! assert_eq!(state.current_player(), PlayerId::SECOND);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, dice, RNG, board tables, outcomes, state, errors
//! - `rules`: the roll resolver
//! - `session`: board + state + dice for an interactive game
//! - `sim`: headless play-outs and batch statistics
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, BoardConfigError, DieRoll, GameError, GameRng, GameState, GameStatus,
    PlayerId, PlayerPair, Redirect, RedirectKind, RollOutcome, TurnRecord, FINAL_CELL,
};

pub use crate::rules::{apply_roll, new_game, roll_dice, DiceSource};

pub use crate::session::{GameSession, GameSessionBuilder, SessionSnapshot};

pub use crate::sim::{play_out, simulate_batch, BatchStats, GameRecord, SimConfig};
