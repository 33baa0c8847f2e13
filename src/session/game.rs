//! A running game: board, state and dice in one place.

use im::Vector;

use crate::core::{
    Board, BoardConfig, BoardConfigError, DieRoll, GameError, GameRng, GameRngState, GameState,
    PlayerId, RollOutcome, TurnRecord,
};
use crate::rules::{apply_roll, new_game, roll_dice};

/// One game session.
///
/// Mutating methods take `&mut self`, so at most one roll is ever in
/// flight per session. Wrap the session in a `Mutex` to share it.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    state: GameState,
    rng: GameRng,
}

/// Builder for creating a GameSession.
#[derive(Clone, Debug)]
pub struct GameSessionBuilder {
    board: BoardConfig,
    seed: Option<u64>,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            board: BoardConfig::standard(),
            seed: None,
        }
    }
}

impl GameSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board tables.
    #[must_use]
    pub fn board(mut self, config: BoardConfig) -> Self {
        self.board = config;
        self
    }

    /// Seed the dice. Without a seed the dice are seeded from entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the board and start a session.
    pub fn build(self) -> Result<GameSession, BoardConfigError> {
        let board = Board::new(self.board)?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(GameSession::with_rng(board, rng))
    }
}

impl GameSession {
    /// Start a game on the standard board with entropy-seeded dice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Board::standard(), GameRng::from_entropy())
    }

    /// Start a game on `board` using `rng` for dice.
    #[must_use]
    pub fn with_rng(board: Board, rng: GameRng) -> Self {
        Self {
            board,
            state: new_game(),
            rng,
        }
    }

    /// Roll the die for the current player and commit the result.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, GameError> {
        let (next, outcome) = roll_dice(&self.board, &self.state, &mut self.rng)?;
        self.state = next;
        Ok(outcome)
    }

    /// Commit a roll supplied by the caller instead of the session's dice.
    pub fn apply(&mut self, roll: DieRoll) -> Result<RollOutcome, GameError> {
        let (next, outcome) = apply_roll(&self.board, &self.state, roll)?;
        self.state = next;
        Ok(outcome)
    }

    /// Like [`apply`](Self::apply), taking a raw die value.
    pub fn apply_value(&mut self, value: u8) -> Result<RollOutcome, GameError> {
        self.apply(DieRoll::new(value)?)
    }

    /// Throw away the current game and start again on the same board.
    ///
    /// The dice keep their stream; a seeded session stays reproducible.
    pub fn reset(&mut self) {
        self.state = new_game();
    }

    // === Queries ===

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn positions(&self) -> [u8; 2] {
        self.state.positions()
    }

    pub fn position(&self, player: PlayerId) -> u8 {
        self.state.position(player)
    }

    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    pub fn turn_number(&self) -> u32 {
        self.state.turn_number()
    }

    pub fn last_outcome(&self) -> Option<RollOutcome> {
        self.state.last_outcome()
    }

    pub fn history(&self) -> &Vector<TurnRecord> {
        self.state.history()
    }

    // === Snapshots ===

    /// Capture the game state and dice position.
    pub fn snapshot(&self) -> Result<SessionSnapshot, bincode::Error> {
        Ok(SessionSnapshot {
            state: self.state.to_bytes()?,
            rng: self.rng.state(),
        })
    }

    /// Return to a previously captured snapshot. The board is unchanged.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> Result<(), bincode::Error> {
        self.state = GameState::from_bytes(&snapshot.state)?;
        self.rng = GameRng::from_state(&snapshot.rng);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoded game state plus the dice position at the time of capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    state: Vec<u8>,
    rng: GameRngState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let session = GameSessionBuilder::new().seed(1).build().unwrap();

        assert_eq!(session.board(), &Board::standard());
        assert_eq!(session.positions(), [0, 0]);
        assert_eq!(session.current_player(), PlayerId::FIRST);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_builder_rejects_bad_board() {
        let err = GameSessionBuilder::new()
            .board(BoardConfig::new().with_ladder(30, 10))
            .build()
            .unwrap_err();

        assert_eq!(err, BoardConfigError::LadderGoesDown { trigger: 30, destination: 10 });
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = GameSessionBuilder::new().seed(9).build().unwrap();
        let mut b = GameSessionBuilder::new().seed(9).build().unwrap();

        for _ in 0..20 {
            assert_eq!(a.roll_dice(), b.roll_dice());
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_apply_value_rejects_bad_die() {
        let mut session = GameSessionBuilder::new().seed(3).build().unwrap();

        assert_eq!(session.apply_value(0), Err(GameError::InvalidRollValue { value: 0 }));
        assert_eq!(session.apply_value(7), Err(GameError::InvalidRollValue { value: 7 }));
        assert_eq!(session.turn_number(), 0);
    }

    #[test]
    fn test_reset() {
        let mut session = GameSessionBuilder::new().seed(3).build().unwrap();
        session.apply_value(4).unwrap();
        session.apply_value(5).unwrap();

        session.reset();
        assert_eq!(session.positions(), [0, 0]);
        assert_eq!(session.turn_number(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut session = GameSessionBuilder::new().seed(11).build().unwrap();
        for _ in 0..5 {
            session.roll_dice().unwrap();
        }

        let snapshot = session.snapshot().unwrap();
        let expected: Vec<_> = (0..5).map(|_| session.roll_dice()).collect();
        let expected_state = session.state().clone();

        session.restore(&snapshot).unwrap();
        let replayed: Vec<_> = (0..5).map(|_| session.roll_dice()).collect();

        assert_eq!(expected, replayed);
        assert_eq!(&expected_state, session.state());
    }
}
