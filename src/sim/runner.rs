//! Headless play-outs.

use crate::core::{Board, GameError, GameRng, GameState};
use crate::rules::{new_game, roll_dice, DiceSource};

use super::stats::{BatchStats, GameRecord};

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Games to play.
    pub games: u32,

    /// Maximum rolls per game before giving up.
    pub max_turns: u32,

    /// Seed offset; game `i` is seeded with `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            max_turns: 1000,
            seed_offset: 0,
        }
    }
}

impl SimConfig {
    /// Create a new simulation config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set maximum rolls per game.
    #[must_use]
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Set seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Roll until someone wins or `max_turns` rolls have been made.
pub fn play_out<D: DiceSource + ?Sized>(
    board: &Board,
    dice: &mut D,
    max_turns: u32,
) -> Result<GameState, GameError> {
    let mut state = new_game();
    while !state.is_finished() && state.turn_number() < max_turns {
        let (next, _) = roll_dice(board, &state, dice)?;
        state = next;
    }
    Ok(state)
}

/// Play `config.games` seeded games and aggregate the results.
pub fn simulate_batch(board: &Board, config: &SimConfig) -> Result<BatchStats, GameError> {
    let mut stats = BatchStats::new();
    for game_index in 0..config.games {
        let mut rng = GameRng::new(config.seed_offset.wrapping_add(u64::from(game_index)));
        let state = play_out(board, &mut rng, config.max_turns)?;
        stats.record(&GameRecord::from_state(&state));
    }
    Ok(stats)
}
