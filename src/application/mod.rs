// Hybrid prediction engine and its sub-models
pub mod engine;

// Walk-forward accuracy evaluation
pub mod evaluation;

// Session orchestration (ledger + engine behind a single writer)
pub mod session;
