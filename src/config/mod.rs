//! Configuration module for spinwise.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by domain: Engine, Session, and Observability.

mod engine_env_config;
mod observability_config;

pub use engine_env_config::EngineEnvConfig;
pub use observability_config::ObservabilityEnvConfig;

use crate::application::session::actor::DEFAULT_QUEUE_CAPACITY;
use crate::domain::config::EngineConfig;
use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Engine (from EngineEnvConfig)
    pub engine: EngineConfig,

    // Session
    pub session_queue_capacity: usize,

    // Observability (from ObservabilityEnvConfig)
    pub observability_enabled: bool,
    pub observability_interval_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This orchestrates loading from all sub-config modules and composes
    /// them into a unified Config struct.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let engine = EngineEnvConfig::from_source(&lookup).context("Failed to load engine config")?;
        let observability = ObservabilityEnvConfig::from_source(&lookup);
        let session_queue_capacity: usize =
            engine_env_config::parse(&lookup, "SESSION_QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY)?;

        if session_queue_capacity == 0 {
            anyhow::bail!("SESSION_QUEUE_CAPACITY must be > 0");
        }

        Ok(Self {
            engine: engine.engine_config(),
            session_queue_capacity,
            observability_enabled: observability.enabled,
            observability_interval_seconds: observability.interval_seconds,
        })
    }
}
