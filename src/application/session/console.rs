//! Line protocol for driving a session from a console.
//!
//! One request per line: a bare integer (`17`), a JSON body (`{"number": 17}`)
//! or `summary`. Every line gets exactly one JSON reply.

use super::actor::SessionHandle;
use super::spin_session::SessionSummary;
use super::SpinRequest;
use crate::domain::errors::SessionError;
use crate::domain::roulette::PredictionTriple;
use serde::Serialize;
use tracing::warn;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number (must be 0-36)";
pub const INSUFFICIENT_HISTORY_MESSAGE: &str = "At least two numbers are required for prediction";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Malformed request: {}", reason),
            code: "invalid_request",
        }
    }
}

impl From<&SessionError> for ErrorResponse {
    fn from(err: &SessionError) -> Self {
        let error = match err {
            SessionError::InvalidOutcome(_) => INVALID_NUMBER_MESSAGE,
            SessionError::InsufficientHistory(_) => INSUFFICIENT_HISTORY_MESSAGE,
            SessionError::Unavailable { .. } => INTERNAL_ERROR_MESSAGE,
        };
        Self {
            error: error.to_string(),
            code: err.code(),
        }
    }
}

/// JSON body written back for one request line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConsoleReply {
    Prediction(PredictionTriple),
    Summary(Box<SessionSummary>),
    Error(ErrorResponse),
}

/// Parse a request line: JSON object or bare integer
pub fn parse_request(line: &str) -> anyhow::Result<SpinRequest> {
    let line = line.trim();
    if line.starts_with('{') {
        Ok(serde_json::from_str(line)?)
    } else {
        Ok(SpinRequest {
            number: line.parse()?,
        })
    }
}

/// Answer one request line.
///
/// Domain failures become `ConsoleReply::Error`; `Err` is returned only when
/// the session itself is gone.
pub async fn handle_line(session: &SessionHandle, line: &str) -> Result<ConsoleReply, SessionError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("summary") {
        return Ok(ConsoleReply::Summary(Box::new(session.summary().await?)));
    }

    let request = match parse_request(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("Console: rejected malformed request '{}': {}", line, e);
            return Ok(ConsoleReply::Error(ErrorResponse::malformed(e)));
        }
    };

    // Out-of-range numbers never reach the session
    if let Err(e) = request.validate() {
        warn!("Console: rejected spin: {}", e);
        return Ok(ConsoleReply::Error(ErrorResponse::from(&SessionError::from(e))));
    }

    match session.record_spin(request.number).await {
        Ok(receipt) => Ok(ConsoleReply::Prediction(receipt.prediction)),
        Err(e @ SessionError::Unavailable { .. }) => Err(e),
        Err(e) => Ok(ConsoleReply::Error(ErrorResponse::from(&e))),
    }
}
