//! Prometheus metrics definitions for spinwise
//!
//! All metrics use the `spinwise_` prefix and are read-only.

use crate::domain::roulette::{Outcome, PredictionTriple};
use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Prometheus metrics for a spin session
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Spins received, by result (accepted / invalid)
    pub spins_total: CounterVec,
    /// Prediction triples served
    pub predictions_total: IntCounter,
    /// Predictions refused for lack of history
    pub insufficient_history_total: IntCounter,
    /// Outcomes currently retained in the ledger
    pub ledger_length: GenericGauge<AtomicF64>,
    /// Time spent rebuilding the model
    pub retrain_duration_seconds: Histogram,
    /// Predictions resolved by a following spin, by horizon and result (hit / miss)
    pub horizon_results_total: CounterVec,
    /// Uptime in seconds
    pub uptime_seconds: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let spins_total = CounterVec::new(
            Opts::new("spinwise_spins_total", "Spins received by result"),
            &["result"],
        )?;
        registry.register(Box::new(spins_total.clone()))?;

        let predictions_total = IntCounter::with_opts(Opts::new(
            "spinwise_predictions_total",
            "Prediction triples served",
        ))?;
        registry.register(Box::new(predictions_total.clone()))?;

        let insufficient_history_total = IntCounter::with_opts(Opts::new(
            "spinwise_insufficient_history_total",
            "Predictions refused because fewer than two outcomes exist",
        ))?;
        registry.register(Box::new(insufficient_history_total.clone()))?;

        let ledger_length = Gauge::with_opts(Opts::new(
            "spinwise_ledger_length",
            "Outcomes retained in the session ledger",
        ))?;
        registry.register(Box::new(ledger_length.clone()))?;

        let retrain_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "spinwise_retrain_duration_seconds",
                "Model rebuild latency in seconds",
            )
            .buckets(vec![
                0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1,
            ]),
        )?;
        registry.register(Box::new(retrain_duration_seconds.clone()))?;

        let horizon_results_total = CounterVec::new(
            Opts::new(
                "spinwise_horizon_results_total",
                "Resolved predictions by horizon and result",
            ),
            &["horizon", "result"],
        )?;
        registry.register(Box::new(horizon_results_total.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "spinwise_uptime_seconds",
            "Process uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            spins_total,
            predictions_total,
            insufficient_history_total,
            ledger_length,
            retrain_duration_seconds,
            horizon_results_total,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Increment spin counter
    pub fn inc_spins(&self, result: &str) {
        self.spins_total.with_label_values(&[result]).inc();
    }

    /// Record hit/miss per horizon for a prediction resolved by `actual`
    pub fn record_scored(&self, prediction: &PredictionTriple, actual: Outcome) {
        for horizon in crate::domain::roulette::Horizon::ALL {
            let result = if prediction.get(horizon) == actual {
                "hit"
            } else {
                "miss"
            };
            self.horizon_results_total
                .with_label_values(&[horizon.as_str(), result])
                .inc();
        }
    }
}
