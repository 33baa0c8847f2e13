//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{BoardConfig, DieRoll, PlayerId};
use crate::session::{GameSession, GameSessionBuilder};

use super::py_core::{board_error_to_py, game_error_to_py, PyRollOutcome};

/// Python wrapper for GameSession.
#[pyclass(name = "SnakesAndLadders")]
pub struct PySnakesAndLadders {
    session: GameSession,
}

#[pymethods]
impl PySnakesAndLadders {
    /// Create a new game.
    ///
    /// # Arguments
    /// - ladders: list of (trigger, destination) pairs; standard table if None
    /// - snakes: list of (trigger, destination) pairs; standard table if None
    /// - seed: RNG seed for reproducible dice; entropy if None
    #[new]
    #[pyo3(signature = (ladders = None, snakes = None, seed = None))]
    fn new(
        ladders: Option<Vec<(u8, u8)>>,
        snakes: Option<Vec<(u8, u8)>>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let standard = BoardConfig::standard();
        let config = BoardConfig {
            ladders: ladders.unwrap_or(standard.ladders),
            snakes: snakes.unwrap_or(standard.snakes),
        };

        let mut builder = GameSessionBuilder::new().board(config);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let session = builder.build().map_err(board_error_to_py)?;
        Ok(Self { session })
    }

    /// Roll the die for the current player.
    ///
    /// Raises RuntimeError once the game is finished.
    fn roll_dice(&mut self) -> PyResult<PyRollOutcome> {
        self.session
            .roll_dice()
            .map(PyRollOutcome)
            .map_err(game_error_to_py)
    }

    /// Apply a specific die value (1-6) for the current player.
    ///
    /// Raises ValueError for any other value, however large or negative.
    fn apply_roll(&mut self, value: i64) -> PyResult<PyRollOutcome> {
        DieRoll::try_from(value)
            .and_then(|roll| self.session.apply(roll))
            .map(PyRollOutcome)
            .map_err(game_error_to_py)
    }

    /// Start a new game on the same board.
    fn reset(&mut self) {
        self.session.reset();
    }

    /// Positions of both players; 0 means off the board.
    #[getter]
    fn positions(&self) -> (u8, u8) {
        let [first, second] = self.session.positions();
        (first, second)
    }

    /// Seat index (0 or 1) of the player to roll next.
    #[getter]
    fn current_player(&self) -> u8 {
        self.session.current_player().raw()
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Seat index of the winner, or None.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.session.winner().map(PlayerId::raw)
    }

    /// Number of rolls made so far.
    #[getter]
    fn turn_number(&self) -> u32 {
        self.session.turn_number()
    }

    /// Ladders as (trigger, destination), sorted by trigger.
    fn ladders(&self) -> Vec<(u8, u8)> {
        self.session.board().ladders().iter().map(|r| (r.from, r.to)).collect()
    }

    /// Snakes as (trigger, destination), sorted by trigger.
    fn snakes(&self) -> Vec<(u8, u8)> {
        self.session.board().snakes().iter().map(|r| (r.from, r.to)).collect()
    }

    fn __repr__(&self) -> String {
        let [first, second] = self.session.positions();
        let status = match self.session.winner() {
            Some(winner) => format!("won by P{}", winner.raw()),
            None => format!("P{} to roll", self.session.current_player().raw()),
        };
        format!("SnakesAndLadders(positions=({}, {}), {})", first, second, status)
    }
}
