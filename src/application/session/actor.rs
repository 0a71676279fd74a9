use super::commands::SessionCommand;
use super::spin_session::{SessionSummary, SpinReceipt, SpinSession};
use crate::domain::errors::SessionError;
use crate::domain::roulette::{Outcome, PredictionTriple};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Default depth of the session command queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Single writer for a `SpinSession`.
///
/// Owns the session and drains its command queue in arrival order; callers
/// talk to it through a cloneable `SessionHandle`.
pub struct SessionActor {
    session: SpinSession,
    cmd_rx: mpsc::Receiver<SessionCommand>,
}

impl SessionActor {
    pub fn new(session: SpinSession, cmd_rx: mpsc::Receiver<SessionCommand>) -> Self {
        Self { session, cmd_rx }
    }

    /// Spawn the actor on the current runtime
    pub fn spawn(session: SpinSession, queue_capacity: usize) -> (SessionHandle, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(queue_capacity.max(1));
        let actor = Self::new(session, cmd_rx);
        let task = tokio::spawn(actor.run());
        (SessionHandle { cmd_tx }, task)
    }

    pub async fn run(mut self) {
        info!("SessionActor {}: started.", self.session.id());

        while let Some(cmd) = self.cmd_rx.recv().await {
            debug!("SessionActor: processing {}", cmd.name());
            self.handle(cmd);
        }

        info!(
            "SessionActor {}: all handles dropped, stopping after {} spins.",
            self.session.id(),
            self.session.ledger().total_observed()
        );
    }

    fn handle(&mut self, cmd: SessionCommand) {
        let name = cmd.name();
        let delivered = match cmd {
            SessionCommand::RecordSpin { number, reply } => {
                reply.send(self.session.record_spin(number)).is_ok()
            }
            SessionCommand::Predict { reply } => reply.send(self.session.predict_current()).is_ok(),
            SessionCommand::Summary { reply } => reply.send(self.session.summary()).is_ok(),
            SessionCommand::History { reply } => {
                reply.send(self.session.ledger().all().to_vec()).is_ok()
            }
        };

        if !delivered {
            warn!("SessionActor: caller went away before {} reply", name);
        }
    }
}

/// Cloneable client for a running `SessionActor`
#[derive(Debug, Clone)]
pub struct SessionHandle {
    cmd_tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    pub async fn record_spin(&self, number: i64) -> Result<SpinReceipt, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.request(SessionCommand::RecordSpin { number, reply }, rx)
            .await?
    }

    pub async fn predict(&self) -> Result<PredictionTriple, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.request(SessionCommand::Predict { reply }, rx).await?
    }

    pub async fn summary(&self) -> Result<SessionSummary, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.request(SessionCommand::Summary { reply }, rx).await
    }

    pub async fn history(&self) -> Result<Vec<Outcome>, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.request(SessionCommand::History { reply }, rx).await
    }

    async fn request<T>(
        &self,
        cmd: SessionCommand,
        rx: oneshot::Receiver<T>,
    ) -> Result<T, SessionError> {
        let name = cmd.name();
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| SessionError::Unavailable {
                reason: format!("session actor stopped, {} not delivered", name),
            })?;

        rx.await.map_err(|_| SessionError::Unavailable {
            reason: format!("session actor dropped {} reply", name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EngineConfig;

    #[tokio::test]
    async fn test_actor_round_trip() {
        let (handle, _task) =
            SessionActor::spawn(SpinSession::new(EngineConfig::default()), DEFAULT_QUEUE_CAPACITY);

        assert!(matches!(
            handle.record_spin(12).await,
            Err(SessionError::InsufficientHistory(_))
        ));
        let receipt = handle.record_spin(12).await.unwrap();
        assert_eq!(receipt.sequence, 2);
        assert_eq!(handle.predict().await.unwrap(), receipt.prediction);

        let history = handle.history().await.unwrap();
        assert_eq!(history.len(), 2);

        let summary = handle.summary().await.unwrap();
        assert_eq!(summary.total_observed, 2);
        assert_eq!(summary.last_prediction, Some(receipt.prediction));
    }

    #[tokio::test]
    async fn test_stopped_actor_is_unavailable() {
        let (cmd_tx, cmd_rx) = mpsc::channel(1);
        drop(cmd_rx);
        let handle = SessionHandle { cmd_tx };

        let err = handle.record_spin(1).await.unwrap_err();
        assert_eq!(err.code(), "unavailable");
    }
}
