//! Operator commands sent from the input layer to the simulation.
//!
//! Commands are validated and queued for processing at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::AmmoType;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Target designation ---
    /// Select the contact nearest a click on the scope.
    /// Offsets are in pixels from the scope centre.
    SelectAt { x_px: f64, y_px: f64 },
    /// Select the contact with the highest threat score.
    AcquireHighestThreat,
    /// Lock the turret on the selected contact.
    Lock,

    // --- Weapon ---
    Fire,
    /// Compute a firing solution for the selected contact.
    CalculateSolution,

    // --- Solver inputs ---
    SetAmmo { ammo: AmmoType },
    SetWind { speed_mps: f64, direction_deg: f64 },
    SetTemperature { celsius: f64 },

    // --- Display / behaviour toggles ---
    SetAutoRecalculate { enabled: bool },
    SetTrajectoryDisplay { enabled: bool },
    SetSound { enabled: bool },
    /// Grow or shrink the sensor range (km).
    ChangeRadarRange { delta_km: f64 },

    // --- Simulation control ---
    Pause,
    Resume,
    /// Regenerate the scenario and restore the weapon.
    Reset,
}
