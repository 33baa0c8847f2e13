//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats at the board.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: seat 0 or seat 1.
///
/// Player indices are 0-based: the first player to roll is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who rolls first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who rolls second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "Player id must be 0 or 1");
        Self(id)
    }

    /// Create a player ID, returning `None` for anything but 0 or 1.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if id < PLAYER_COUNT as u8 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in seat order.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

/// Raw seat index that is neither 0 nor 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPlayerId(pub u8);

impl std::fmt::Display for InvalidPlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid player id {} (expected 0 or 1)", self.0)
    }
}

impl std::error::Error for InvalidPlayerId {}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_new(id).ok_or(InvalidPlayerId(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data with one slot for each seat.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerPair};
///
/// let mut positions: PlayerPair<u8> = PlayerPair::with_value(0);
/// positions[PlayerId::SECOND] = 25;
///
/// assert_eq!(positions[PlayerId::FIRST], 0);
/// assert_eq!(positions[PlayerId::SECOND], 25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair from explicit per-seat values.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Borrow the underlying array in seat order.
    #[must_use]
    pub fn as_array(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }

    /// Consume the pair, returning the underlying array.
    pub fn into_array(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0, PlayerId::FIRST);
        assert_eq!(p1.index(), 1);
        assert_eq!(p1.raw(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(format!("{}", p1), "Player 2");
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_id_try_new() {
        assert_eq!(PlayerId::try_new(0), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::try_new(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::try_new(2), None);
    }

    #[test]
    #[should_panic(expected = "Player id must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_serde_rejects_unknown_seat() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        assert_eq!(json, "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::FIRST);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<u32> = PlayerPair::new(|p| p.index() as u32 * 10);

        assert_eq!(pair[PlayerId::FIRST], 0);
        assert_eq!(pair[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair = PlayerPair::from_array([3u8, 4u8]);
        pair[PlayerId::SECOND] = 40;

        assert_eq!(pair.into_array(), [3, 40]);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::from_array([7u8, 9u8]);
        let pairs: Vec<_> = pair.iter().collect();

        assert_eq!(pairs, vec![(PlayerId::FIRST, &7), (PlayerId::SECOND, &9)]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::from_array([12u8, 99u8]);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
