//! Per-game records and batch statistics.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, PlayerPair, RedirectKind, RollOutcome};

/// Summary of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Winner, or `None` if the turn cap was reached first.
    pub winner: Option<PlayerId>,

    /// Rolls taken, counting both players.
    pub turns: u32,

    /// Ladders climbed, per player.
    pub ladders: PlayerPair<u32>,

    /// Snakes hit, per player.
    pub snakes: PlayerPair<u32>,

    /// Overshoot rolls, per player.
    pub overshoots: PlayerPair<u32>,

    /// Positions when the game stopped.
    pub final_positions: [u8; 2],
}

impl GameRecord {
    /// Summarize a state's turn history.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut ladders = PlayerPair::with_value(0);
        let mut snakes = PlayerPair::with_value(0);
        let mut overshoots = PlayerPair::with_value(0);

        for record in state.history() {
            let player = record.outcome.player();
            match record.redirect.map(|r| r.kind) {
                Some(RedirectKind::Ladder) => ladders[player] += 1,
                Some(RedirectKind::Snake) => snakes[player] += 1,
                None => {}
            }
            if matches!(record.outcome, RollOutcome::Overshoot { .. }) {
                overshoots[player] += 1;
            }
        }

        Self {
            winner: state.winner(),
            turns: state.turn_number(),
            ladders,
            snakes,
            overshoots,
            final_positions: state.positions(),
        }
    }

    /// Check if the game reached a winner.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Aggregate statistics over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Games played.
    pub games: u32,

    /// Wins per player.
    pub wins: PlayerPair<u32>,

    /// Games stopped by the turn cap.
    pub unfinished: u32,

    /// Sum of turns over finished games.
    pub total_turns: u64,

    /// Fewest turns in a finished game.
    pub shortest: Option<u32>,

    /// Most turns in a finished game.
    pub longest: Option<u32>,

    /// Ladders climbed, all games and players.
    pub ladders: u64,

    /// Snakes hit, all games and players.
    pub snakes: u64,
}

impl BatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the totals.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.ladders += game.ladders.iter().map(|(_, &n)| u64::from(n)).sum::<u64>();
        self.snakes += game.snakes.iter().map(|(_, &n)| u64::from(n)).sum::<u64>();

        match game.winner {
            Some(winner) => {
                self.wins[winner] += 1;
                self.total_turns += u64::from(game.turns);
                self.shortest = Some(self.shortest.map_or(game.turns, |s| s.min(game.turns)));
                self.longest = Some(self.longest.map_or(game.turns, |l| l.max(game.turns)));
            }
            None => self.unfinished += 1,
        }
    }

    /// Number of games that reached a winner.
    #[must_use]
    pub fn finished(&self) -> u32 {
        self.games - self.unfinished
    }

    /// Average turns per finished game.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.finished() == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.finished())
        }
    }

    /// Fraction of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.finished() == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.finished())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<PlayerId>, turns: u32) -> GameRecord {
        GameRecord {
            winner,
            turns,
            ladders: PlayerPair::from_array([1, 2]),
            snakes: PlayerPair::from_array([0, 1]),
            overshoots: PlayerPair::with_value(0),
            final_positions: [0, 0],
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = BatchStats::new();
        assert_eq!(stats.mean_turns(), 0.0);
        assert_eq!(stats.win_rate(PlayerId::FIRST), 0.0);
        assert_eq!(stats.shortest, None);
    }

    #[test]
    fn test_record_aggregates() {
        let mut stats = BatchStats::new();
        stats.record(&record(Some(PlayerId::FIRST), 30));
        stats.record(&record(Some(PlayerId::SECOND), 50));
        stats.record(&record(Some(PlayerId::FIRST), 40));
        stats.record(&record(None, 500));

        assert_eq!(stats.games, 4);
        assert_eq!(stats.finished(), 3);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.wins.into_array(), [2, 1]);
        assert_eq!(stats.shortest, Some(30));
        assert_eq!(stats.longest, Some(50));
        assert!((stats.mean_turns() - 40.0).abs() < 1e-9);
        assert!((stats.win_rate(PlayerId::FIRST) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.ladders, 12);
        assert_eq!(stats.snakes, 4);
    }
}
