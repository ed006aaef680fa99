//! Configuration types for the playback core

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cadence of the background driver, and the amount position
    /// advances per tick (default: 100 ms).
    ///
    /// The tick is a placeholder for decode-driven timing: where a
    /// real output backend exposes its own clock, position should be
    /// derived from it instead. Tests shrink the tick to run the
    /// driver fast.
    pub tick: Duration,

    /// Initial volume, 0-100 (default: 50)
    pub volume: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            volume: 50,
        }
    }
}
