use super::{FrequencyModel, RecencyModel, TransitionModel};
use crate::domain::config::EngineConfig;
use crate::domain::errors::PredictionError;
use crate::domain::ports::OutcomePredictor;
use crate::domain::roulette::{Outcome, PredictionTriple};
use tracing::debug;

/// Outcomes required before a prediction is meaningful
pub const MIN_HISTORY_FOR_PREDICTION: usize = 2;

/// Everything the engine derives from a history
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    pub frequency: FrequencyModel,
    pub recency: RecencyModel,
    pub transitions: TransitionModel,
    pub observed: usize,
}

impl ModelState {
    pub fn from_history(history: &[Outcome], config: &EngineConfig) -> Self {
        Self {
            frequency: FrequencyModel::from_history(history),
            recency: RecencyModel::from_history(
                history,
                config.recency_window,
                config.recency_decay,
            ),
            transitions: TransitionModel::from_history(history),
            observed: history.len(),
        }
    }
}

/// Frequency + recency + transition hybrid model.
///
/// `retrain` rebuilds the full `ModelState` off to the side and commits it in
/// one assignment, so a failed rebuild never leaves a half-updated model.
#[derive(Debug, Clone)]
pub struct HybridPredictionEngine {
    config: EngineConfig,
    state: ModelState,
}

impl HybridPredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let state = ModelState::from_history(&[], &config);
        Self { config, state }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Outcomes in the last trained history
    pub fn observed(&self) -> usize {
        self.state.observed
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }
}

impl Default for HybridPredictionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl OutcomePredictor for HybridPredictionEngine {
    fn retrain(&mut self, history: &[Outcome]) {
        let state = ModelState::from_history(history, &self.config);
        debug!(
            "HybridPredictionEngine: retrained on {} outcomes ({} transition pairs)",
            state.observed,
            state.transitions.pair_count()
        );
        self.state = state;
    }

    fn predict(
        &self,
        penultimate: Outcome,
        last: Outcome,
    ) -> Result<PredictionTriple, PredictionError> {
        if self.state.observed < MIN_HISTORY_FOR_PREDICTION {
            return Err(PredictionError::InsufficientHistory {
                observed: self.state.observed,
                required: MIN_HISTORY_FOR_PREDICTION,
            });
        }

        let long_term = self.state.frequency.top_pick();
        let short_term = self
            .state
            .transitions
            .predict(penultimate, last, self.config.transition_min_samples)
            .unwrap_or(long_term);

        Ok(PredictionTriple {
            short_term,
            mid_term: self.state.recency.top_pick(),
            long_term,
        })
    }

    fn name(&self) -> &str {
        "Hybrid Frequency/Recency/Transition"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn o(v: i64) -> Outcome {
        Outcome::new(v).unwrap()
    }

    fn history(values: &[i64]) -> Vec<Outcome> {
        values.iter().map(|v| o(*v)).collect()
    }

    fn trained(values: &[i64]) -> HybridPredictionEngine {
        let mut engine = HybridPredictionEngine::default();
        engine.retrain(&history(values));
        engine
    }

    #[test]
    fn test_untrained_engine_refuses() {
        let engine = HybridPredictionEngine::default();
        assert_eq!(
            engine.predict(o(1), o(2)),
            Err(PredictionError::InsufficientHistory {
                observed: 0,
                required: 2
            })
        );
    }

    #[test]
    fn test_single_outcome_is_insufficient() {
        let engine = trained(&[3]);
        assert_eq!(
            engine.predict(o(3), o(3)),
            Err(PredictionError::InsufficientHistory {
                observed: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_two_outcomes_predict() {
        let engine = trained(&[14, 22]);
        let triple = engine.predict(o(14), o(22)).unwrap();
        // Tie between 14 and 22 goes to 14; no transition yet so short falls back
        assert_eq!(triple.long_term, o(14));
        assert_eq!(triple.short_term, o(14));
        // Newest outcome has the largest recency weight
        assert_eq!(triple.mid_term, o(22));
    }

    #[test]
    fn test_mode_scenario() {
        let engine = trained(&[5, 5, 5, 10, 17]);
        let triple = engine.predict(o(10), o(17)).unwrap();
        assert_eq!(triple.long_term, o(5));
        assert_eq!(triple.short_term, o(5), "unseen pair falls back to the mode");
        assert_eq!(triple.mid_term, o(5));
    }

    #[test]
    fn test_short_term_follows_transitions() {
        let engine = trained(&[4, 9, 33, 1, 1, 1, 4, 9, 33, 1, 4, 9]);
        let triple = engine.predict(o(4), o(9)).unwrap();
        assert_eq!(triple.short_term, o(33));
        assert_eq!(triple.long_term, o(1));
    }

    #[test]
    fn test_transition_min_samples_falls_back() {
        let config = EngineConfig {
            transition_min_samples: 3,
            ..EngineConfig::default()
        };
        let mut engine = HybridPredictionEngine::new(config);
        engine.retrain(&history(&[4, 9, 33, 1, 1, 1, 4, 9, 33, 1, 4, 9]));

        // (4, 9) has only two followers
        let triple = engine.predict(o(4), o(9)).unwrap();
        assert_eq!(triple.short_term, o(1));
    }

    #[test]
    fn test_repeated_predict_is_deterministic() {
        let engine = trained(&[2, 2, 2, 2]);
        let first = engine.predict(o(2), o(2)).unwrap();
        let second = engine.predict(o(2), o(2)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.short_term, o(2));
    }

    #[test]
    fn test_retrain_is_idempotent() {
        let values = [0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23];
        let mut once = HybridPredictionEngine::default();
        once.retrain(&history(&values));

        let mut twice = HybridPredictionEngine::default();
        twice.retrain(&history(&values));
        twice.retrain(&history(&values));

        assert_eq!(once.state(), twice.state());
        for pen in Outcome::all() {
            assert_eq!(once.predict(pen, o(8)), twice.predict(pen, o(8)));
        }
    }

    #[test]
    fn test_retrain_replaces_state() {
        let mut engine = trained(&[7, 7, 7]);
        engine.retrain(&history(&[1, 2]));
        assert_eq!(engine.observed(), 2);
        assert_eq!(engine.predict(o(1), o(2)).unwrap().long_term, o(1));

        engine.retrain(&[]);
        assert!(engine.predict(o(1), o(2)).is_err());
    }
}
