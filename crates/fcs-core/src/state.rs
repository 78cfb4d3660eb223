//! Display snapshot: the complete visible state handed to the display layer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, LogEntry};
use crate::types::{FiringSolution, PlanarPosition, SimTime, SolverInputs, TrajectoryPoint};

/// Complete fire-control state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FcsSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub radar: RadarView,
    pub targets: Vec<TargetView>,
    pub turret: TurretView,
    /// Latest firing solution, if one has been computed for the selected contact.
    pub solution: Option<FiringSolution>,
    /// Projectile preview, only populated while trajectory display is on.
    pub trajectory: Vec<TrajectoryPoint>,
    pub settings: SettingsView,
    /// Log entries written since the previous snapshot.
    pub log: Vec<LogEntry>,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

/// A contact on the scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    /// Display label, e.g. `TGT-003`.
    pub id: String,
    pub class: TargetClass,
    pub position: PlanarPosition,
    /// Range from origin (km).
    pub distance_km: f64,
    /// Bearing from origin (degrees).
    pub bearing_deg: f64,
    pub elevation_deg: f64,
    pub speed_mps: f64,
    /// Heading (radians), drawn as the motion vector.
    pub heading_rad: f64,
    pub threat: f64,
    pub threat_level: ThreatLevel,
    pub selected: bool,
    pub locked: bool,
    /// Whether the contact lies inside the current sensor range.
    pub in_display_range: bool,
}

/// Sensor status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    pub range_km: f64,
    /// Current sweep angle (radians).
    pub sweep_angle: f64,
}

/// Turret and weapon status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurretView {
    pub phase: TurretPhase,
    pub weapon: WeaponStatus,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub rounds_remaining: u32,
    pub reload_ready: bool,
    pub locked: bool,
    pub selected: Option<String>,
}

/// Operator settings echoed back to the input layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsView {
    pub solver: SolverInputs,
    pub auto_recalculate: bool,
    pub show_trajectory: bool,
    pub sound: bool,
}

/// Running engagement tally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
}
