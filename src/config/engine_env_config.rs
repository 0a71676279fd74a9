//! Engine configuration parsing from environment variables.
//!
//! This module handles loading the prediction engine tuning and the ledger
//! retention cap.

use crate::domain::config::EngineConfig;
use crate::domain::roulette::ledger::DEFAULT_MAX_HISTORY_LEN;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Engine environment configuration
#[derive(Debug, Clone)]
pub struct EngineEnvConfig {
    pub recency_window: usize,
    pub recency_decay: f64,
    pub transition_min_samples: u32,
    pub max_history_len: usize,
}

impl EngineEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, test fixture)
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            recency_window: parse(&lookup, "RECENCY_WINDOW", 20)?,
            recency_decay: parse(&lookup, "RECENCY_DECAY", 0.85)?,
            transition_min_samples: parse(&lookup, "TRANSITION_MIN_SAMPLES", 1)?,
            max_history_len: parse(&lookup, "MAX_HISTORY_LEN", DEFAULT_MAX_HISTORY_LEN)?,
        };

        config
            .engine_config()
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid engine configuration")?;

        Ok(config)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            recency_window: self.recency_window,
            recency_decay: self.recency_decay,
            transition_min_samples: self.transition_min_samples,
            max_history_len: self.max_history_len,
        }
    }
}

pub(crate) fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .context(format!("Failed to parse {}", key))
}
