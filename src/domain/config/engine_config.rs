use crate::domain::roulette::ledger::DEFAULT_MAX_HISTORY_LEN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning of the hybrid prediction engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Outcomes considered by the mid-term (recency) sub-model
    pub recency_window: usize,
    /// Weight multiplier per step of age in the recency window, in (0, 1]
    pub recency_decay: f64,
    /// Followers a pair needs before the short-term sub-model trusts it
    pub transition_min_samples: u32,
    /// Retention cap of the session ledger
    pub max_history_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recency_window: 20,
            recency_decay: 0.85,
            transition_min_samples: 1,
            max_history_len: DEFAULT_MAX_HISTORY_LEN,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.recency_window == 0 {
            return Err("recency_window must be > 0".to_string());
        }
        if !(self.recency_decay > 0.0 && self.recency_decay <= 1.0) {
            return Err(format!("Invalid recency_decay: {}", self.recency_decay));
        }
        if self.transition_min_samples == 0 {
            return Err("transition_min_samples must be > 0".to_string());
        }
        if self.max_history_len < 2 {
            return Err(format!(
                "max_history_len must be >= 2, got {}",
                self.max_history_len
            ));
        }
        Ok(())
    }

    /// Load and validate a TOML engine configuration. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config {}", path.display()))?;
        let config: EngineConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse engine config {}", path.display()))?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }
}
