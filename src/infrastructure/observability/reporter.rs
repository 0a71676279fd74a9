//! Periodic JSON snapshots of a running spin session.
//!
//! Output only: snapshots are written to the log, nothing listens for requests.

use crate::application::session::{SessionHandle, SessionSummary};
use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// One reported sample of a session
#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub session: SessionSummary,
}

/// Logs a `METRICS_JSON:` line per interval until the session stops answering
pub struct MetricsReporter {
    session: SessionHandle,
    metrics: Metrics,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    /// `interval_seconds` below 1 is raised to 1
    pub fn new(session: SessionHandle, metrics: Metrics, interval_seconds: u64) -> Self {
        Self {
            session,
            metrics,
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds.max(1)),
        }
    }

    pub async fn run(self) {
        info!(
            "MetricsReporter: reporting every {:?}",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = match self.collect_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("MetricsReporter: session unavailable ({}), stopping", e);
                    return;
                }
            };

            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    info!(target: "metrics", "METRICS_JSON:{}", json);
                    info!(
                        "Spins: {} | Retained: {} | Scored: {} | Uptime: {}s",
                        snapshot.session.total_observed,
                        snapshot.session.retained,
                        snapshot.session.scoreboard.scored,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("MetricsReporter: snapshot not serializable: {}", e),
            }
        }
    }

    /// Query the session and refresh the uptime gauge
    pub async fn collect_snapshot(&self) -> anyhow::Result<MetricsSnapshot> {
        let session = self.session.summary().await?;
        let uptime = self.start_time.elapsed().as_secs();
        self.metrics.uptime_seconds.set(uptime as f64);

        Ok(MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime,
            version: env!("CARGO_PKG_VERSION").to_string(),
            session,
        })
    }
}
