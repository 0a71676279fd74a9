use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spinwise::application::engine::HybridPredictionEngine;
use spinwise::application::evaluation::{EvaluationReport, WalkForwardEvaluator};
use spinwise::domain::config::EngineConfig;
use spinwise::domain::roulette::Outcome;
use spinwise::domain::roulette::outcome::MAX_OUTCOME;
use spinwise::infrastructure::load_history;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Walk-forward evaluation of the hybrid engine over a recorded or synthetic history
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recorded history file (CSV, one outcome per row)
    #[arg(long, conflicts_with = "synthetic", required_unless_present = "synthetic")]
    file: Option<PathBuf>,

    /// Number of seeded uniform random spins to evaluate instead of a file
    #[arg(long)]
    synthetic: Option<usize>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Engine tuning file (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn synthetic_history(spins: usize, seed: u64) -> anyhow::Result<Vec<Outcome>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..spins)
        .map(|_| {
            let value = rng.random_range(0..=i64::from(MAX_OUTCOME));
            Outcome::new(value).context("generated outcome out of range")
        })
        .collect()
}

fn print_report(report: &EvaluationReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// `RUST_LOG` directives when present and valid, INFO otherwise
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Setup logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid engine configuration")?;

    let history = match (&cli.file, cli.synthetic) {
        (Some(file), _) => {
            info!("Loading history from {}", file.display());
            load_history(file)?
        }
        (None, Some(spins)) => {
            info!("Generating {} synthetic spins (seed {})", spins, cli.seed);
            synthetic_history(spins, cli.seed)?
        }
        (None, None) => anyhow::bail!("either --file or --synthetic is required"),
    };

    let max_history_len = config.max_history_len;
    let mut engine = HybridPredictionEngine::new(config);
    let report = WalkForwardEvaluator::run(&mut engine, &history, max_history_len);

    for horizon in &report.horizons {
        info!(
            "{}: {} hits ({:.2}% vs baseline {:.2}%)",
            horizon.horizon,
            horizon.hits,
            horizon.hit_rate * 100.0,
            report.baseline_hit_rate * 100.0
        );
    }
    info!("Evaluated {} predictions in {}ms", report.scored, report.elapsed_ms);

    print_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_directives() {
        let filter = log_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_synthetic_history_is_seeded() {
        let first = synthetic_history(50, 7).unwrap();
        assert_eq!(first, synthetic_history(50, 7).unwrap());
        assert_eq!(first.len(), 50);
    }
}
