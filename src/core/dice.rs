//! A single six-sided die value.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Value shown by a six-sided die, always in `1..=6`.
///
/// The resolver only accepts `DieRoll`, so out-of-range values are rejected
/// once, at the boundary where raw numbers enter the engine.
///
/// ```
/// use snakes_ladders::core::DieRoll;
///
/// let roll = DieRoll::new(4).unwrap();
/// assert_eq!(roll.value(), 4);
/// assert!(DieRoll::new(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    /// Lowest face.
    pub const MIN: u8 = 1;

    /// Highest face.
    pub const MAX: u8 = 6;

    /// Wrap a raw die value.
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidRollValue { value: i64::from(value) })
        }
    }

    /// Wrap a value already known to be a die face.
    pub(crate) fn from_face(value: u8) -> Self {
        debug_assert!((Self::MIN..=Self::MAX).contains(&value));
        Self(value)
    }

    /// The face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every face, lowest first.
    pub fn faces() -> impl Iterator<Item = DieRoll> {
        (Self::MIN..=Self::MAX).map(DieRoll)
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Accepts values from wider sources such as script bindings.
impl TryFrom<i64> for DieRoll {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|face| Self::new(face).ok())
            .ok_or(GameError::InvalidRollValue { value })
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
