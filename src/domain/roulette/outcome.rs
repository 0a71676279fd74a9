use crate::domain::errors::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pockets on a European wheel (0-36)
pub const POCKET_COUNT: usize = 37;

/// Highest valid outcome
pub const MAX_OUTCOME: u8 = 36;

/// Red pockets of the European wheel. Every other non-zero pocket is black.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// A single spin result, guaranteed to be in 0-36
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Outcome(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

/// Low (1-18) / High (19-36) band. Zero belongs to neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Outcome {
    pub const ZERO: Outcome = Outcome(0);

    /// Validate a raw value coming from outside the core
    pub fn new(value: i64) -> Result<Self, LedgerError> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_OUTCOME => Ok(Self(v)),
            _ => Err(LedgerError::InvalidOutcome { value }),
        }
    }

    /// Every outcome in ascending order
    pub fn all() -> impl Iterator<Item = Outcome> {
        (0..=MAX_OUTCOME).map(Outcome)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Position in per-pocket tables
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|v| *v <= MAX_OUTCOME)
            .map(Outcome)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn color(self) -> Color {
        if self.is_zero() {
            Color::Green
        } else if RED_NUMBERS.contains(&self.0) {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn band(self) -> Option<Band> {
        match self.0 {
            0 => None,
            1..=18 => Some(Band::Low),
            _ => Some(Band::High),
        }
    }

    pub fn parity(self) -> Option<Parity> {
        match self.0 {
            0 => None,
            v if v % 2 == 0 => Some(Parity::Even),
            _ => Some(Parity::Odd),
        }
    }

    /// Dozen 1 (1-12), 2 (13-24) or 3 (25-36)
    pub fn dozen(self) -> Option<u8> {
        (!self.is_zero()).then(|| (self.0 - 1) / 12 + 1)
    }

    /// Table column 1, 2 or 3
    pub fn column(self) -> Option<u8> {
        (!self.is_zero()).then(|| (self.0 - 1) % 3 + 1)
    }
}

impl TryFrom<i64> for Outcome {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Outcome::new(value)
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.0
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        for value in 0..=36 {
            assert_eq!(Outcome::new(value).unwrap().value() as i64, value);
        }
        assert_eq!(
            Outcome::new(37),
            Err(LedgerError::InvalidOutcome { value: 37 })
        );
        assert_eq!(
            Outcome::new(-1),
            Err(LedgerError::InvalidOutcome { value: -1 })
        );
        assert!(Outcome::new(i64::MAX).is_err());
    }

    #[test]
    fn test_color_map() {
        assert_eq!(Outcome::ZERO.color(), Color::Green);
        let reds = Outcome::all().filter(|o| o.color() == Color::Red).count();
        let blacks = Outcome::all().filter(|o| o.color() == Color::Black).count();
        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
        assert_eq!(Outcome::new(32).unwrap().color(), Color::Red);
        assert_eq!(Outcome::new(15).unwrap().color(), Color::Black);
    }

    #[test]
    fn test_bands_dozens_columns() {
        assert_eq!(Outcome::ZERO.band(), None);
        assert_eq!(Outcome::new(18).unwrap().band(), Some(Band::Low));
        assert_eq!(Outcome::new(19).unwrap().band(), Some(Band::High));

        assert_eq!(Outcome::new(12).unwrap().dozen(), Some(1));
        assert_eq!(Outcome::new(13).unwrap().dozen(), Some(2));
        assert_eq!(Outcome::new(36).unwrap().dozen(), Some(3));

        assert_eq!(Outcome::new(1).unwrap().column(), Some(1));
        assert_eq!(Outcome::new(35).unwrap().column(), Some(2));
        assert_eq!(Outcome::new(36).unwrap().column(), Some(3));
        assert_eq!(Outcome::ZERO.parity(), None);
    }

    #[test]
    fn test_serde_validates() {
        let outcome: Outcome = serde_json::from_str("17").unwrap();
        assert_eq!(outcome.value(), 17);
        assert!(serde_json::from_str::<Outcome>("40").is_err());
        assert_eq!(serde_json::to_string(&outcome).unwrap(), "17");
    }
}
