use crate::application::engine::HybridPredictionEngine;
use crate::application::engine::hybrid::MIN_HISTORY_FOR_PREDICTION;
use crate::domain::config::EngineConfig;
use crate::domain::errors::{PredictionError, SessionError};
use crate::domain::ports::OutcomePredictor;
use crate::domain::roulette::{
    HistoryLedger, HistorySummary, HorizonScoreboard, Outcome, PredictionTriple,
};
use crate::infrastructure::observability::Metrics;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of an accepted spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpinReceipt {
    /// Position of this spin among all spins accepted by the session (1-based)
    pub sequence: u64,
    pub outcome: Outcome,
    pub prediction: PredictionTriple,
}

/// Session state exposed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub model: String,
    pub total_observed: u64,
    pub retained: usize,
    pub history: HistorySummary,
    pub scoreboard: HorizonScoreboard,
    pub last_prediction: Option<PredictionTriple>,
}

/// One ledger and the model trained on it.
///
/// `record_spin` performs append, retrain and predict as one step; callers
/// needing shared access go through `SessionActor`.
pub struct SpinSession {
    id: Uuid,
    ledger: HistoryLedger,
    predictor: Box<dyn OutcomePredictor>,
    scoreboard: HorizonScoreboard,
    last_prediction: Option<PredictionTriple>,
    metrics: Option<Metrics>,
}

impl SpinSession {
    /// Session backed by the hybrid engine
    pub fn new(config: EngineConfig) -> Self {
        let max_history_len = config.max_history_len;
        Self::with_predictor(
            Box::new(HybridPredictionEngine::new(config)),
            max_history_len,
        )
    }

    pub fn with_predictor(predictor: Box<dyn OutcomePredictor>, max_history_len: usize) -> Self {
        let id = Uuid::new_v4();
        info!(
            "SpinSession {}: created with model '{}' {} (max history {})",
            id,
            predictor.name(),
            predictor.version(),
            max_history_len
        );

        Self {
            id,
            ledger: HistoryLedger::with_max_len(max_history_len),
            predictor,
            scoreboard: HorizonScoreboard::default(),
            last_prediction: None,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// Append `number`, retrain and predict the next outcome
    pub fn record_spin(&mut self, number: i64) -> Result<SpinReceipt, SessionError> {
        if let Err(e) = self.ledger.append(number) {
            warn!("SpinSession {}: rejected spin: {}", self.id, e);
            if let Some(metrics) = &self.metrics {
                metrics.inc_spins("invalid");
            }
            return Err(e.into());
        }

        let Some(&outcome) = self.ledger.last(1).first() else {
            return Err(SessionError::Unavailable {
                reason: "ledger empty after append".to_string(),
            });
        };

        if let Some(previous) = self.last_prediction.take() {
            self.scoreboard.record(&previous, outcome);
            if let Some(metrics) = &self.metrics {
                metrics.record_scored(&previous, outcome);
            }
        }

        let started = Instant::now();
        self.predictor.retrain(self.ledger.all());
        let retrain_secs = started.elapsed().as_secs_f64();

        if let Some(metrics) = &self.metrics {
            metrics.inc_spins("accepted");
            metrics.ledger_length.set(self.ledger.len() as f64);
            metrics.retrain_duration_seconds.observe(retrain_secs);
        }

        let prediction = self.predict_current()?;
        self.last_prediction = Some(prediction);

        debug!(
            "SpinSession {}: spin #{} = {} -> short={} mid={} long={}",
            self.id,
            self.ledger.total_observed(),
            outcome,
            prediction.short_term,
            prediction.mid_term,
            prediction.long_term
        );

        Ok(SpinReceipt {
            sequence: self.ledger.total_observed(),
            outcome,
            prediction,
        })
    }

    /// Predict from the last two retained outcomes against the current model
    pub fn predict_current(&self) -> Result<PredictionTriple, SessionError> {
        let result = match self.ledger.last(MIN_HISTORY_FOR_PREDICTION) {
            [penultimate, last] => self.predictor.predict(*penultimate, *last),
            available => Err(PredictionError::InsufficientHistory {
                observed: available.len(),
                required: MIN_HISTORY_FOR_PREDICTION,
            }),
        };

        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(_) => metrics.predictions_total.inc(),
                Err(_) => metrics.insufficient_history_total.inc(),
            }
        }

        result.map_err(SessionError::from)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            model: self.predictor.name().to_string(),
            total_observed: self.ledger.total_observed(),
            retained: self.ledger.len(),
            history: HistorySummary::from_history(self.ledger.all()),
            scoreboard: self.scoreboard,
            last_prediction: self.last_prediction,
        }
    }
}
