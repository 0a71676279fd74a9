use crate::domain::errors::PredictionError;
use crate::domain::roulette::{Outcome, PredictionTriple};

/// Interface for online next-outcome models
pub trait OutcomePredictor: Send + Sync {
    /// Rebuild model state from the ordered history.
    /// Must be idempotent for identical history content.
    fn retrain(&mut self, history: &[Outcome]);

    /// Predict the next outcome at each horizon given the last two outcomes
    fn predict(
        &self,
        penultimate: Outcome,
        last: Outcome,
    ) -> Result<PredictionTriple, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
