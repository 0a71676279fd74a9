use super::argmax_lowest;
use crate::domain::roulette::Outcome;
use crate::domain::roulette::outcome::POCKET_COUNT;

/// Exponentially decayed weights over the most recent outcomes.
///
/// The newest outcome weighs 1.0, the one before it `decay`, then `decay^2`,
/// and so on for `window` outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct RecencyModel {
    weights: [f64; POCKET_COUNT],
    window_len: usize,
}

impl RecencyModel {
    pub fn from_history(history: &[Outcome], window: usize, decay: f64) -> Self {
        let mut weights = [0.0f64; POCKET_COUNT];
        let start = history.len().saturating_sub(window);
        let recent = &history[start..];

        let mut weight = 1.0;
        for outcome in recent.iter().rev() {
            weights[outcome.index()] += weight;
            weight *= decay;
        }

        Self {
            weights,
            window_len: recent.len(),
        }
    }

    pub fn weight(&self, outcome: Outcome) -> f64 {
        self.weights[outcome.index()]
    }

    /// Number of outcomes that contributed
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Heaviest outcome, lowest value on ties
    pub fn top_pick(&self) -> Outcome {
        argmax_lowest(&self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(values: &[i64]) -> Vec<Outcome> {
        values.iter().map(|v| Outcome::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_recent_outcomes_dominate() {
        // 3 is the long-run mode but 8 dominates the last few spins
        let model = RecencyModel::from_history(&history(&[3, 3, 3, 3, 3, 3, 8, 8]), 4, 0.5);
        assert_eq!(model.window_len(), 4);
        assert_eq!(model.top_pick().value(), 8);
        assert!((model.weight(Outcome::new(8).unwrap()) - 1.5).abs() < 1e-12);
        assert!((model.weight(Outcome::new(3).unwrap()) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_window_excludes_older_outcomes() {
        let model = RecencyModel::from_history(&history(&[1, 1, 1, 2]), 1, 0.9);
        assert_eq!(model.top_pick().value(), 2);
        assert_eq!(model.weight(Outcome::new(1).unwrap()), 0.0);
    }

    #[test]
    fn test_no_decay_is_windowed_mode() {
        let model = RecencyModel::from_history(&history(&[9, 4, 9, 4]), 20, 1.0);
        assert_eq!(model.window_len(), 4);
        assert_eq!(model.top_pick().value(), 4);
    }

    #[test]
    fn test_short_history() {
        let model = RecencyModel::from_history(&history(&[11]), 20, 0.85);
        assert_eq!(model.window_len(), 1);
        assert_eq!(model.top_pick().value(), 11);
    }
}
