use super::spin_session::{SessionSummary, SpinReceipt};
use crate::domain::errors::SessionError;
use crate::domain::roulette::{Outcome, PredictionTriple};
use tokio::sync::oneshot;

/// Command abstraction for SessionActor operations
///
/// Every read or write of a session goes through this enum, so the actor
/// applies them one at a time in arrival order.
#[derive(Debug)]
pub enum SessionCommand {
    /// Append a new outcome, retrain and predict from the last two outcomes
    RecordSpin {
        number: i64,
        reply: oneshot::Sender<Result<SpinReceipt, SessionError>>,
    },

    /// Predict from the current ledger without appending
    Predict {
        reply: oneshot::Sender<Result<PredictionTriple, SessionError>>,
    },

    /// Auxiliary statistics and horizon scoreboard
    Summary {
        reply: oneshot::Sender<SessionSummary>,
    },

    /// Copy of the retained ledger, oldest first
    History {
        reply: oneshot::Sender<Vec<Outcome>>,
    },
}

impl SessionCommand {
    /// Returns the command name for logging purposes
    pub fn name(&self) -> &'static str {
        match self {
            Self::RecordSpin { .. } => "RecordSpin",
            Self::Predict { .. } => "Predict",
            Self::Summary { .. } => "Summary",
            Self::History { .. } => "History",
        }
    }
}
