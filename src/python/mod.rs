//! Python bindings for the snakes and ladders engine.
//!
//! Lets a Python presentation layer (tkinter, pygame, a notebook) drive the
//! engine: it calls `roll_dice()` when the user presses the button and
//! redraws tokens from the returned outcome.
//!
//! # Quick Start
//!
//! ```python
//! import snakes_ladders as sl
//!
//! game = sl.SnakesAndLadders()
//! outcome = game.roll_dice()
//! print(outcome.kind, outcome.player, outcome.from_cell, outcome.to_cell)
//!
//! if game.is_finished:
//!     print("winner:", game.winner)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// snakes_ladders: a two-player snakes and ladders engine.
#[pymodule]
fn snakes_ladders(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRollOutcome>()?;
    m.add_class::<PySnakesAndLadders>()?;

    Ok(())
}
