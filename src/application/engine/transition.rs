use super::argmax_lowest;
use crate::domain::roulette::Outcome;
use crate::domain::roulette::outcome::POCKET_COUNT;
use std::collections::HashMap;

/// Outcomes observed right after one (penultimate, last) pair
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerCounts {
    counts: [u32; POCKET_COUNT],
    total: u32,
}

impl FollowerCounts {
    fn new() -> Self {
        Self {
            counts: [0; POCKET_COUNT],
            total: 0,
        }
    }

    fn record(&mut self, next: Outcome) {
        self.counts[next.index()] += 1;
        self.total += 1;
    }

    pub fn count(&self, next: Outcome) -> u32 {
        self.counts[next.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Most frequent follower, lowest value on ties
    pub fn top_follower(&self) -> Outcome {
        argmax_lowest(&self.counts)
    }
}

/// Second-order transition table: (penultimate, last) -> follower distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionModel {
    pairs: HashMap<(Outcome, Outcome), FollowerCounts>,
}

impl TransitionModel {
    pub fn from_history(history: &[Outcome]) -> Self {
        let mut pairs: HashMap<(Outcome, Outcome), FollowerCounts> = HashMap::new();
        for window in history.windows(3) {
            pairs
                .entry((window[0], window[1]))
                .or_insert_with(FollowerCounts::new)
                .record(window[2]);
        }
        Self { pairs }
    }

    pub fn followers(&self, penultimate: Outcome, last: Outcome) -> Option<&FollowerCounts> {
        self.pairs.get(&(penultimate, last))
    }

    /// Most frequent follower of the pair, `None` when it has fewer than
    /// `min_samples` recorded followers
    pub fn predict(&self, penultimate: Outcome, last: Outcome, min_samples: u32) -> Option<Outcome> {
        self.followers(penultimate, last)
            .filter(|f| f.total() >= min_samples.max(1))
            .map(FollowerCounts::top_follower)
    }

    /// Distinct pairs that have at least one follower
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
