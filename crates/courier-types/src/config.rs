//! Configuration types for the Courier gateway, parsed from `gateway.yaml`.
//!
//! The classifier itself has no configuration file; its category table is a
//! code constant owned by the classifier crate. Everything configurable lives
//! at the gateway boundary: where the engine is, how long to wait for it, and
//! how large the realtime fan-out buffer is.

use serde::{Deserialize, Serialize};

/// Top-level gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Workflow execution engine settings.
    pub engine: EngineConfig,
    /// Realtime fan-out settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
}

/// Workflow execution engine (webhook) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the engine, e.g. `http://localhost:5678`.
    pub base_url: String,
    /// Seconds to wait for a webhook execution before giving up.
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

fn default_webhook_timeout_secs() -> u64 {
    30
}

/// Realtime broadcast channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Capacity of the broadcast channel; slow subscribers that fall more
    /// than this many updates behind start losing the oldest ones.
    pub channel_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}
