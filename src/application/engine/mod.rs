//! Hybrid next-outcome prediction engine
//!
//! Three independent sub-models, one per horizon:
//! - `TransitionModel` (short term): followers of the last two outcomes
//! - `RecencyModel` (mid term): decayed sliding window
//! - `FrequencyModel` (long term): mode of the retained history

pub mod frequency;
pub mod hybrid;
pub mod recency;
pub mod transition;

pub use frequency::FrequencyModel;
pub use hybrid::{HybridPredictionEngine, ModelState};
pub use recency::RecencyModel;
pub use transition::TransitionModel;

use crate::domain::roulette::Outcome;
use crate::domain::roulette::outcome::POCKET_COUNT;

/// Outcome with the largest score. Ties go to the lowest outcome value.
pub(crate) fn argmax_lowest<T: PartialOrd + Copy>(scores: &[T; POCKET_COUNT]) -> Outcome {
    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }
    Outcome::from_index(best).unwrap_or(Outcome::ZERO)
}
