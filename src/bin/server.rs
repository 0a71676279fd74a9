//! spinwise Server - Headless prediction session
//!
//! Reads one spin per line from stdin, either a bare integer (`17`) or a JSON
//! request (`{"number": 17}`), and answers each line with one JSON line on
//! stdout: `{"shortTerm":..,"midTerm":..,"longTerm":..}` or `{"error":..,"code":..}`.
//! The line `summary` prints the current session statistics instead.
//! Logs go to stderr.
//!
//! # Usage
//! ```sh
//! RECENCY_WINDOW=30 cargo run --bin server < spins.txt
//! ```
//!
//! # Environment Variables
//! - `RECENCY_WINDOW`, `RECENCY_DECAY`, `TRANSITION_MIN_SAMPLES`, `MAX_HISTORY_LEN` - Engine tuning
//! - `SESSION_QUEUE_CAPACITY` - Session command queue depth (default: 64)
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::Result;
use serde::Serialize;
use spinwise::application::session::console::{self, ErrorResponse};
use spinwise::application::session::{SessionActor, SpinSession};
use spinwise::config::Config;
use spinwise::infrastructure::observability::{Metrics, MetricsReporter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stderr only, stdout carries responses)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    info!("spinwise Server {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: Engine={:?}", config.engine);

    let metrics = Metrics::new()?;
    let session = SpinSession::new(config.engine.clone()).with_metrics(metrics.clone());
    let (handle, actor_task) = SessionActor::spawn(session, config.session_queue_capacity);

    // Start metrics reporter if enabled
    if config.observability_enabled {
        let reporter = MetricsReporter::new(
            handle.clone(),
            metrics,
            config.observability_interval_seconds,
        );
        tokio::spawn(async move {
            reporter.run().await;
        });
        info!(
            "Metrics reporter started (interval: {}s)",
            config.observability_interval_seconds
        );
    } else {
        info!("Metrics reporting disabled.");
    }

    info!("Reading spins from stdin. Ctrl+C or EOF to stop.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed.");
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match console::handle_line(&handle, line).await {
                    Ok(reply) => emit(&reply),
                    Err(e) => {
                        emit(&ErrorResponse::from(&e));
                        return Err(e.into());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    let summary = handle.summary().await?;
    info!(
        "Session {} finished: {} spins, {} predictions scored",
        summary.session_id, summary.total_observed, summary.scoreboard.scored
    );

    drop(handle);
    actor_task.await.ok();
    Ok(())
}
