//! Bridge configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::engine::SamplingDefaults;

/// Fixed port the completion API listens on (loopback only).
pub const DEFAULT_PORT: u16 = 4891;

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_ack_timeout_ms() -> u64 {
    10_000
}

/// Settings for the embedded completion bridge.
///
/// Every field carries a default, so a host can deserialize `{}` (or any
/// partial object) out of its settings store and get a working bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Listen port on the loopback interface.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the wait for a transcript acknowledgment, in
    /// milliseconds.
    #[serde(default = "default_ack_timeout_ms")]
    pub transcript_ack_timeout_ms: u64,

    /// Process-wide sampling knobs not exposed through the API.
    #[serde(default)]
    pub sampling: SamplingDefaults,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            transcript_ack_timeout_ms: default_ack_timeout_ms(),
            sampling: SamplingDefaults::default(),
        }
    }
}

impl BridgeSettings {
    pub fn transcript_ack_timeout(&self) -> Duration {
        Duration::from_millis(self.transcript_ack_timeout_ms)
    }
}
