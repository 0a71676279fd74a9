use super::outcome::Outcome;
use super::prediction::{Horizon, PredictionTriple};
use serde::{Deserialize, Serialize};

/// Hits per horizon for predictions that have since been resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonScoreboard {
    pub scored: u64,
    pub short_term_hits: u64,
    pub mid_term_hits: u64,
    pub long_term_hits: u64,
}

impl HorizonScoreboard {
    /// Score `prediction` against the outcome that followed it
    pub fn record(&mut self, prediction: &PredictionTriple, actual: Outcome) {
        self.scored += 1;
        for horizon in prediction.hits(actual) {
            match horizon {
                Horizon::ShortTerm => self.short_term_hits += 1,
                Horizon::MidTerm => self.mid_term_hits += 1,
                Horizon::LongTerm => self.long_term_hits += 1,
            }
        }
    }

    pub fn hits(&self, horizon: Horizon) -> u64 {
        match horizon {
            Horizon::ShortTerm => self.short_term_hits,
            Horizon::MidTerm => self.mid_term_hits,
            Horizon::LongTerm => self.long_term_hits,
        }
    }

    /// Fraction of scored predictions that hit, 0 when nothing was scored
    pub fn hit_rate(&self, horizon: Horizon) -> f64 {
        if self.scored == 0 {
            return 0.0;
        }
        self.hits(horizon) as f64 / self.scored as f64
    }
}
