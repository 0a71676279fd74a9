// Engine configuration
pub mod config;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Roulette outcomes, ledger and derived statistics
pub mod roulette;
