use thiserror::Error;

/// Errors raised by the history ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid outcome: {value} is outside 0-36")]
    InvalidOutcome { value: i64 },
}

/// Errors raised by a prediction engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("Insufficient history: {observed} outcome(s) observed, {required} required")]
    InsufficientHistory { observed: usize, required: usize },
}

/// Errors surfaced by a spin session to its callers (console, transport)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidOutcome(#[from] LedgerError),

    #[error(transparent)]
    InsufficientHistory(#[from] PredictionError),

    #[error("Session unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SessionError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidOutcome(_) => "invalid_outcome",
            Self::InsufficientHistory(_) => "insufficient_history",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_formatting() {
        let error = LedgerError::InvalidOutcome { value: 37 };
        let msg = error.to_string();
        assert!(msg.contains("37"));
        assert!(msg.contains("0-36"));
    }

    #[test]
    fn test_session_error_wraps_domain_errors() {
        let error: SessionError = PredictionError::InsufficientHistory {
            observed: 1,
            required: 2,
        }
        .into();

        assert_eq!(error.code(), "insufficient_history");
        assert!(error.to_string().contains("1 outcome(s) observed"));

        let error: SessionError = LedgerError::InvalidOutcome { value: -1 }.into();
        assert_eq!(error.code(), "invalid_outcome");
    }
}
