//! Observability configuration parsing from environment variables.
//!
//! This module handles loading monitoring and metrics configuration.

use std::env;

/// Observability environment configuration
#[derive(Debug, Clone)]
pub struct ObservabilityEnvConfig {
    pub enabled: bool,
    pub interval_seconds: u64,
}

impl Default for ObservabilityEnvConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 60,
        }
    }
}

impl ObservabilityEnvConfig {
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            enabled: lookup("OBSERVABILITY_ENABLED")
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(defaults.enabled),
            interval_seconds: lookup("OBSERVABILITY_INTERVAL")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.interval_seconds),
        }
    }
}
