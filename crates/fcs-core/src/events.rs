//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{format_clock, TargetId};

/// Audio cues for the display layer. Only emitted while sound is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Lock tone.
    LockOn { target: TargetId },
    /// Gun report.
    Shot { ammo: AmmoType },
    /// Shot resolved.
    Splash { result: ShotResult, target: TargetId },
}

/// One line of the operator event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub tick: u64,
    /// Simulation time the entry was written (seconds).
    pub time_secs: f64,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS] message`, the format used on screen and in exports.
    pub fn render(&self) -> String {
        format!("[{}] {}", format_clock(self.time_secs), self.message)
    }
}
