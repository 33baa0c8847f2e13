//! Interactive game sessions.
//!
//! A `GameSession` is what a presentation layer holds: it owns the
//! validated board, the current state and the dice, and exposes one
//! mutator per user action (roll, reset) plus read-only queries.

mod game;

pub use game::{GameSession, GameSessionBuilder, SessionSnapshot};
