use super::argmax_lowest;
use crate::domain::roulette::Outcome;
use crate::domain::roulette::outcome::POCKET_COUNT;

/// Occurrence counts per pocket over the whole retained history
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    counts: [u64; POCKET_COUNT],
    total: u64,
}

impl FrequencyModel {
    pub fn from_history(history: &[Outcome]) -> Self {
        let mut counts = [0u64; POCKET_COUNT];
        for outcome in history {
            counts[outcome.index()] += 1;
        }

        Self {
            counts,
            total: history.len() as u64,
        }
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Empirical probability, uniform when nothing has been observed
    pub fn probability(&self, outcome: Outcome) -> f64 {
        if self.total == 0 {
            return 1.0 / POCKET_COUNT as f64;
        }
        self.count(outcome) as f64 / self.total as f64
    }

    /// The mode, lowest value on ties
    pub fn top_pick(&self) -> Outcome {
        argmax_lowest(&self.counts)
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self::from_history(&[])
    }
}
