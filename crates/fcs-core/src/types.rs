//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TEMPERATURE_C, DT};
use crate::enums::{AmmoType, TargetClass};

/// Planar position relative to the sensor origin (kilometres, Cartesian).
/// x grows to the right of the scope, y grows downward, matching the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarPosition {
    pub x_km: f64,
    pub y_km: f64,
}

impl PlanarPosition {
    pub fn new(x_km: f64, y_km: f64) -> Self {
        Self { x_km, y_km }
    }

    /// Build a position from polar coordinates (angle in radians).
    pub fn from_polar(distance_km: f64, angle_rad: f64) -> Self {
        Self {
            x_km: angle_rad.cos() * distance_km,
            y_km: angle_rad.sin() * distance_km,
        }
    }

    /// Range from the origin (km).
    pub fn distance_km(&self) -> f64 {
        self.x_km.hypot(self.y_km)
    }

    /// Bearing from the origin in degrees, `atan2(y, x)`.
    pub fn bearing_deg(&self) -> f64 {
        self.y_km.atan2(self.x_km).to_degrees()
    }
}

/// Session-unique contact identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TGT-{:03}", self.0)
    }
}

/// Read-only kinematic snapshot of one contact, handed to the ballistic solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub id: TargetId,
    pub class: TargetClass,
    pub position: PlanarPosition,
    /// Heading in radians, same angular convention as the bearing.
    pub heading_rad: f64,
    /// Speed (m/s).
    pub speed_mps: f64,
    /// Range from origin (km), consistent with `position`.
    pub distance_km: f64,
    /// Bearing from origin (degrees), consistent with `position`.
    pub bearing_deg: f64,
    /// Elevation angle above the horizon (degrees).
    pub elevation_deg: f64,
    /// Threat score in [0, 100].
    pub threat: f64,
}

impl TargetState {
    /// Velocity vector (m/s).
    pub fn velocity(&self) -> DVec2 {
        DVec2::from_angle(self.heading_rad) * self.speed_mps
    }
}

/// Static ballistic data for one ammunition type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmmoProfile {
    /// Muzzle velocity (m/s).
    pub muzzle_velocity: f64,
    /// Drag coefficient. Not consumed by the current solver.
    pub drag_coefficient: f64,
    /// Projectile mass (kg).
    pub mass_kg: f64,
}

/// Environment and ammunition inputs assembled by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverInputs {
    pub ammo: AmmoType,
    /// Wind speed (m/s).
    pub wind_speed_mps: f64,
    /// Direction the wind blows from (degrees, same convention as bearing).
    pub wind_direction_deg: f64,
    /// Ambient temperature (°C).
    pub temperature_c: f64,
}

impl Default for SolverInputs {
    fn default() -> Self {
        Self {
            ammo: AmmoType::default(),
            wind_speed_mps: 0.0,
            wind_direction_deg: 0.0,
            temperature_c: DEFAULT_TEMPERATURE_C,
        }
    }
}

/// Gun laying computed for one target. Ephemeral, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiringSolution {
    /// Target the solution was computed against.
    pub target: TargetId,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    /// Lead (milliradians).
    pub lead_mils: f64,
    pub time_of_flight_secs: f64,
    /// Range after first-order closure correction (m).
    pub effective_distance_m: f64,
    /// Muzzle velocity the solution assumed (m/s).
    pub muzzle_velocity: f64,
    /// Air density estimate (kg/m³). Informational only.
    pub air_density: f64,
}

/// One sample of the projectile preview path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub time_secs: f64,
    /// Horizontal position (m), rotated by the solved azimuth.
    pub ground: DVec2,
    /// Height above the muzzle (m).
    pub height_m: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each running frame).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += DT;
    }

    /// Wall-clock style `HH:MM:SS` rendering of the elapsed time.
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Format seconds as `HH:MM:SS`.
pub fn format_clock(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}
