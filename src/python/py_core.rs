//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{BoardConfigError, GameError, RollOutcome, FINAL_CELL};

/// Map an engine error onto the closest Python exception.
pub(crate) fn game_error_to_py(err: GameError) -> PyErr {
    match err {
        GameError::InvalidRollValue { .. } => PyValueError::new_err(err.to_string()),
        GameError::GameAlreadyFinished { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}

pub(crate) fn board_error_to_py(err: BoardConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for RollOutcome.
#[pyclass(name = "RollOutcome")]
#[derive(Clone, Debug)]
pub struct PyRollOutcome(pub RollOutcome);

#[pymethods]
impl PyRollOutcome {
    /// "moved", "overshoot" or "win".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            RollOutcome::Moved { .. } => "moved",
            RollOutcome::Overshoot { .. } => "overshoot",
            RollOutcome::Win { .. } => "win",
        }
    }

    /// Seat index (0 or 1) of the player who rolled.
    #[getter]
    fn player(&self) -> u8 {
        self.0.player().raw()
    }

    /// The die value.
    #[getter]
    fn roll(&self) -> u8 {
        self.0.roll().value()
    }

    /// Cell the token left, for moves only.
    #[getter]
    fn from_cell(&self) -> Option<u8> {
        match self.0 {
            RollOutcome::Moved { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Cell the token ended on; None for an overshoot.
    #[getter]
    fn to_cell(&self) -> Option<u8> {
        match self.0 {
            RollOutcome::Moved { to, .. } => Some(to),
            RollOutcome::Win { .. } => Some(FINAL_CELL),
            RollOutcome::Overshoot { .. } => None,
        }
    }

    #[getter]
    fn is_win(&self) -> bool {
        self.0.is_win()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("RollOutcome({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
