//! Rules of play.
//!
//! - `apply_roll`: pure transition from one state to the next
//! - `roll_dice`: draws a die value, then delegates to `apply_roll`
//! - `DiceSource`: where die values come from
//!
//! The board tables are consulted but never interpreted beyond a single
//! trigger lookup per move.

pub mod engine;

pub use engine::{apply_roll, new_game, roll_dice, DiceSource};
