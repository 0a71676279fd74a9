use spinwise::application::engine::HybridPredictionEngine;
use spinwise::application::session::{SessionActor, SpinSession};
use spinwise::domain::config::EngineConfig;
use spinwise::domain::errors::{PredictionError, SessionError};
use spinwise::domain::ports::OutcomePredictor;
use spinwise::domain::roulette::Outcome;
use spinwise::infrastructure::Metrics;
use std::collections::HashSet;
use tokio_test::{assert_err, assert_ok};

/// Test: concurrent spins never observe a partially-applied append
///
/// Every prediction handed back must equal what a fresh engine produces from
/// exactly the prefix of the history that ends with that spin.
#[tokio::test]
async fn test_concurrent_spins_see_consistent_state() {
    let session = SpinSession::new(EngineConfig::default());
    let (handle, _task) = SessionActor::spawn(session, 8);

    let mut tasks = Vec::new();
    for i in 0..50i64 {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            handle.record_spin((i * 7) % 37).await
        }));
    }

    let mut receipts = Vec::new();
    let mut insufficient = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(receipt) => receipts.push(receipt),
            Err(SessionError::InsufficientHistory(_)) => insufficient += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    // Only the very first spin lacks history
    assert_eq!(insufficient, 1);
    assert_eq!(receipts.len(), 49);

    let sequences: HashSet<u64> = receipts.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, (2..=50).collect());

    let history = handle.history().await.unwrap();
    assert_eq!(history.len(), 50);

    for receipt in &receipts {
        let end = receipt.sequence as usize;
        assert_eq!(history[end - 1], receipt.outcome);

        let mut engine = HybridPredictionEngine::default();
        engine.retrain(&history[..end]);
        let expected = engine.predict(history[end - 2], history[end - 1]).unwrap();
        assert_eq!(receipt.prediction, expected, "spin #{}", end);
    }
}

#[tokio::test]
async fn test_first_spin_is_kept_but_not_predicted() {
    let (handle, _task) = SessionActor::spawn(SpinSession::new(EngineConfig::default()), 4);

    let result = handle.record_spin(3).await;
    assert_eq!(
        result,
        Err(SessionError::InsufficientHistory(
            PredictionError::InsufficientHistory {
                observed: 1,
                required: 2
            }
        ))
    );
    assert_eq!(handle.history().await.unwrap(), vec![Outcome::new(3).unwrap()]);

    let receipt = handle.record_spin(8).await.unwrap();
    assert_eq!(receipt.sequence, 2);
    assert_eq!(handle.predict().await.unwrap(), receipt.prediction);
}

#[tokio::test]
async fn test_invalid_spin_changes_nothing() {
    let (handle, _task) = SessionActor::spawn(SpinSession::new(EngineConfig::default()), 4);

    assert_err!(handle.record_spin(5).await);
    let before = assert_ok!(handle.record_spin(10).await);

    let err = assert_err!(handle.record_spin(37).await);
    assert_eq!(err.code(), "invalid_outcome");

    assert_eq!(handle.history().await.unwrap().len(), 2);
    assert_eq!(handle.predict().await.unwrap(), before.prediction);
}

#[tokio::test]
async fn test_scoreboard_and_metrics_follow_spins() {
    let metrics = Metrics::new().unwrap();
    let session = SpinSession::new(EngineConfig::default()).with_metrics(metrics.clone());
    let (handle, _task) = SessionActor::spawn(session, 4);

    for n in [12, 12, 12, 12, 40, 12] {
        let _ = handle.record_spin(n).await;
    }

    let summary = handle.summary().await.unwrap();
    assert_eq!(summary.total_observed, 5);
    // Predictions from spins 2..4 were each resolved by a following 12
    assert_eq!(summary.scoreboard.scored, 3);
    assert_eq!(summary.scoreboard.long_term_hits, 3);
    assert_eq!(summary.history.total, 5);

    let rendered = metrics.render();
    assert!(rendered.contains("spinwise_spins_total{result=\"invalid\"} 1"));
    assert!(rendered.contains("spinwise_spins_total{result=\"accepted\"} 5"));
}

#[tokio::test]
async fn test_handle_reports_unavailable_after_actor_stops() {
    let (handle, task) = SessionActor::spawn(SpinSession::new(EngineConfig::default()), 1);
    task.abort();
    let _ = task.await;

    let err = handle.record_spin(1).await.unwrap_err();
    assert_eq!(err.code(), "unavailable");
}
