pub mod actor;
pub mod commands;
pub mod console;
pub mod spin_session;

pub use actor::{SessionActor, SessionHandle};
pub use commands::SessionCommand;
pub use console::{ConsoleReply, ErrorResponse};
pub use spin_session::{SessionSummary, SpinReceipt, SpinSession};

use crate::domain::errors::LedgerError;
use crate::domain::roulette::Outcome;
use serde::{Deserialize, Serialize};

/// Inbound request from a transport: the newest observed outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRequest {
    pub number: i64,
}

impl SpinRequest {
    /// Boundary check before the request reaches a session
    pub fn validate(&self) -> Result<Outcome, LedgerError> {
        Outcome::new(self.number)
    }
}
