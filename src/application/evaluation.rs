//! Walk-forward evaluation of a predictor over a recorded history
//!
//! Each outcome from the third onward is predicted from the prefix before it,
//! using a model retrained on the newest `max_history_len` outcomes of that
//! prefix, the same window a live session's ledger retains.

use crate::application::engine::hybrid::MIN_HISTORY_FOR_PREDICTION;
use crate::domain::ports::OutcomePredictor;
use crate::domain::roulette::outcome::POCKET_COUNT;
use crate::domain::roulette::{Horizon, HorizonScoreboard, Outcome};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Per-horizon accuracy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonReport {
    pub horizon: Horizon,
    pub hits: u64,
    pub hit_rate: f64,
    /// Predicted and actual outcome share a color
    pub color_hits: u64,
    pub color_hit_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub model: String,
    pub spins: usize,
    pub scored: u64,
    /// Hit rate of a uniform guess on a fair wheel
    pub baseline_hit_rate: f64,
    pub horizons: Vec<HorizonReport>,
    pub elapsed_ms: u128,
}

pub struct WalkForwardEvaluator;

impl WalkForwardEvaluator {
    pub fn run(
        predictor: &mut dyn OutcomePredictor,
        history: &[Outcome],
        max_history_len: usize,
    ) -> EvaluationReport {
        let started = Instant::now();
        let window = max_history_len.max(MIN_HISTORY_FOR_PREDICTION);
        let mut scoreboard = HorizonScoreboard::default();
        let mut color_hits = [0u64; 3];

        for i in 2..history.len() {
            predictor.retrain(&history[i.saturating_sub(window)..i]);
            let Ok(prediction) = predictor.predict(history[i - 2], history[i - 1]) else {
                continue;
            };

            let actual = history[i];
            scoreboard.record(&prediction, actual);
            for (slot, horizon) in Horizon::ALL.iter().enumerate() {
                if prediction.get(*horizon).color() == actual.color() {
                    color_hits[slot] += 1;
                }
            }
        }

        let rate = |hits: u64| {
            if scoreboard.scored == 0 {
                0.0
            } else {
                hits as f64 / scoreboard.scored as f64
            }
        };

        let horizons = Horizon::ALL
            .iter()
            .enumerate()
            .map(|(slot, horizon)| HorizonReport {
                horizon: *horizon,
                hits: scoreboard.hits(*horizon),
                hit_rate: scoreboard.hit_rate(*horizon),
                color_hits: color_hits[slot],
                color_hit_rate: rate(color_hits[slot]),
            })
            .collect();

        let report = EvaluationReport {
            model: predictor.name().to_string(),
            spins: history.len(),
            scored: scoreboard.scored,
            baseline_hit_rate: 1.0 / POCKET_COUNT as f64,
            horizons,
            elapsed_ms: started.elapsed().as_millis(),
        };

        info!(
            "WalkForwardEvaluator: {} spins, {} scored in {}ms",
            report.spins, report.scored, report.elapsed_ms
        );
        report
    }
}
