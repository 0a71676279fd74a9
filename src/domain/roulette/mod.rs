pub mod ledger;
pub mod outcome;
pub mod prediction;
pub mod scoreboard;
pub mod statistics;

pub use ledger::HistoryLedger;
pub use outcome::{Band, Color, Outcome, Parity};
pub use prediction::{Horizon, PredictionTriple};
pub use scoreboard::HorizonScoreboard;
pub use statistics::HistorySummary;
