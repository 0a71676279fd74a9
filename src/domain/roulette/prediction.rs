use super::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistical horizon a prediction is framed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// Transition pattern of the last two outcomes
    ShortTerm,
    /// Recency-weighted sliding window
    MidTerm,
    /// Whole retained history
    LongTerm,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::ShortTerm, Horizon::MidTerm, Horizon::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MidTerm => "mid_term",
            Self::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three independent next-outcome predictions, one per horizon.
///
/// Serializes as `{"shortTerm": n, "midTerm": n, "longTerm": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionTriple {
    pub short_term: Outcome,
    pub mid_term: Outcome,
    pub long_term: Outcome,
}

impl PredictionTriple {
    pub fn get(&self, horizon: Horizon) -> Outcome {
        match horizon {
            Horizon::ShortTerm => self.short_term,
            Horizon::MidTerm => self.mid_term,
            Horizon::LongTerm => self.long_term,
        }
    }

    /// Horizons whose prediction matches `actual`
    pub fn hits(&self, actual: Outcome) -> impl Iterator<Item = Horizon> + '_ {
        Horizon::ALL
            .into_iter()
            .filter(move |h| self.get(*h) == actual)
    }
}
