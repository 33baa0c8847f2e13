//! Roll resolution.
//!
//! [`apply_roll`] is the whole rulebook: a pure function from
//! (board, state, die value) to (new state, outcome). [`roll_dice`] is the
//! thin runtime wrapper that draws the die value from a [`DiceSource`].

use crate::core::board::Board;
use crate::core::config::FINAL_CELL;
use crate::core::dice::DieRoll;
use crate::core::error::GameError;
use crate::core::outcome::{RollOutcome, TurnRecord};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, GameStatus};

/// Anything that can produce die values.
///
/// Implemented for [`GameRng`] and for closures, so tests can script rolls:
///
/// ```
/// use snakes_ladders::core::{Board, DieRoll, GameState};
/// use snakes_ladders::rules::roll_dice;
///
/// let mut always_six = || DieRoll::new(6).unwrap();
/// let (state, _) = roll_dice(&Board::standard(), &GameState::new(), &mut always_six).unwrap();
/// assert_eq!(state.positions(), [25, 0]);
/// ```
pub trait DiceSource {
    /// Produce the next die value.
    fn roll_die(&mut self) -> DieRoll;
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> DieRoll {
        GameRng::roll_die(self)
    }
}

impl<F: FnMut() -> DieRoll> DiceSource for F {
    fn roll_die(&mut self) -> DieRoll {
        self()
    }
}

/// Start a new game: both tokens off the board, first player to roll.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Apply one die roll for the current player.
///
/// Order of checks:
/// 1. A finished game rejects the roll.
/// 2. A move past the final cell is an overshoot; the token stays and the
///    turn passes.
/// 3. The landing cell is resolved once against the board (ladder first).
/// 4. Exactly the final cell wins; the turn does not pass.
/// 5. Anything else is an ordinary move and the turn passes.
///
/// `state` is never modified; on error nothing changes.
pub fn apply_roll(
    board: &Board,
    state: &GameState,
    roll: DieRoll,
) -> Result<(GameState, RollOutcome), GameError> {
    if let GameStatus::Finished { winner } = state.status {
        return Err(GameError::GameAlreadyFinished { winner });
    }

    let player = state.current_player;
    let current = state.positions[player];
    let tentative = current + roll.value();
    let mut next = state.clone();
    let turn = state.turn_number() + 1;

    if tentative > FINAL_CELL {
        let outcome = RollOutcome::Overshoot { player, roll };
        next.current_player = player.other();
        next.history.push_back(TurnRecord::new(turn, outcome, None));
        return Ok((next, outcome));
    }

    let (resolved, redirect) = board.resolve(tentative);
    next.positions[player] = resolved;

    let outcome = if resolved == FINAL_CELL {
        next.status = GameStatus::Finished { winner: player };
        RollOutcome::Win { player, final_roll: roll }
    } else {
        next.current_player = player.other();
        RollOutcome::Moved {
            player,
            from: current,
            to: resolved,
            roll,
        }
    };

    next.history.push_back(TurnRecord::new(turn, outcome, redirect));
    Ok((next, outcome))
}

/// Roll a die from `dice` and apply it.
///
/// A finished game is rejected before the die is rolled, so `dice` is not
/// advanced on error.
pub fn roll_dice<D: DiceSource + ?Sized>(
    board: &Board,
    state: &GameState,
    dice: &mut D,
) -> Result<(GameState, RollOutcome), GameError> {
    if let Some(winner) = state.winner() {
        return Err(GameError::GameAlreadyFinished { winner });
    }
    apply_roll(board, state, dice.roll_die())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Redirect, RedirectKind};
    use crate::core::config::BoardConfig;
    use crate::core::player::PlayerId;

    fn roll(value: u8) -> DieRoll {
        DieRoll::new(value).unwrap()
    }

    #[test]
    fn test_plain_move_switches_turn() {
        let board = Board::standard();
        let (state, outcome) = apply_roll(&board, &new_game(), roll(3)).unwrap();

        assert_eq!(
            outcome,
            RollOutcome::Moved { player: PlayerId::FIRST, from: 0, to: 3, roll: roll(3) }
        );
        assert_eq!(state.positions(), [3, 0]);
        assert_eq!(state.current_player(), PlayerId::SECOND);
        assert_eq!(state.turn_number(), 1);
    }

    #[test]
    fn test_second_player_moves_own_token() {
        let board = Board::standard();
        let state = new_game().with_current_player(PlayerId::SECOND);
        let (state, outcome) = apply_roll(&board, &state, roll(2)).unwrap();

        assert_eq!(outcome.player(), PlayerId::SECOND);
        assert_eq!(state.positions(), [0, 2]);
        assert_eq!(state.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_snake_redirect_recorded() {
        let board = Board::standard();
        let state = new_game().with_position(PlayerId::FIRST, 66);
        let (state, outcome) = apply_roll(&board, &state, roll(4)).unwrap();

        assert_eq!(
            outcome,
            RollOutcome::Moved { player: PlayerId::FIRST, from: 66, to: 55, roll: roll(4) }
        );
        let record = state.history().back().unwrap();
        assert_eq!(record.redirect, Some(Redirect { kind: RedirectKind::Snake, from: 70, to: 55 }));
    }

    #[test]
    fn test_overshoot_keeps_position_and_passes_turn() {
        let board = Board::standard();
        let state = new_game().with_position(PlayerId::FIRST, 98);
        let (next, outcome) = apply_roll(&board, &state, roll(3)).unwrap();

        assert_eq!(outcome, RollOutcome::Overshoot { player: PlayerId::FIRST, roll: roll(3) });
        assert_eq!(next.position(PlayerId::FIRST), 98);
        assert_eq!(next.current_player(), PlayerId::SECOND);
        assert!(!next.is_finished());
    }

    #[test]
    fn test_redirect_onto_final_cell_wins() {
        let board = Board::new(BoardConfig::new().with_ladder(80, 100)).unwrap();
        let state = new_game().with_position(PlayerId::FIRST, 77);
        let (next, outcome) = apply_roll(&board, &state, roll(3)).unwrap();

        assert_eq!(outcome, RollOutcome::Win { player: PlayerId::FIRST, final_roll: roll(3) });
        assert_eq!(next.winner(), Some(PlayerId::FIRST));
        assert_eq!(next.current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_input_state_untouched() {
        let board = Board::standard();
        let state = new_game().with_position(PlayerId::FIRST, 10);
        let before = state.clone();

        let _ = apply_roll(&board, &state, roll(1)).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_finished_game_rejects_without_rolling() {
        let board = Board::standard();
        let state = new_game().with_position(PlayerId::FIRST, 94);
        let (finished, _) = apply_roll(&board, &state, roll(6)).unwrap();

        let mut rolls = 0;
        let mut counting = || {
            rolls += 1;
            roll(1)
        };
        let err = roll_dice(&board, &finished, &mut counting).unwrap_err();

        assert_eq!(err, GameError::GameAlreadyFinished { winner: PlayerId::FIRST });
        assert_eq!(rolls, 0);
    }

    #[test]
    fn test_roll_dice_with_rng() {
        let board = Board::standard();
        let mut rng = GameRng::new(42);
        let (state, outcome) = roll_dice(&board, &new_game(), &mut rng).unwrap();

        assert_eq!(outcome.player(), PlayerId::FIRST);
        assert!(state.position(PlayerId::FIRST) >= 1);
        assert_eq!(state.current_player(), PlayerId::SECOND);
    }
}
