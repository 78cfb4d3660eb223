//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::AmmoProfile;

/// Contact category. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetClass {
    /// Main battle tank.
    Armor,
    /// Armoured personnel carrier.
    InfantryCarrier,
    /// Helicopter.
    RotaryWing,
    /// Drone.
    Unmanned,
    /// Soft-skinned vehicle.
    LightVehicle,
}

impl TargetClass {
    /// Every class, in generation order.
    pub const ALL: [TargetClass; 5] = [
        TargetClass::Armor,
        TargetClass::InfantryCarrier,
        TargetClass::RotaryWing,
        TargetClass::Unmanned,
        TargetClass::LightVehicle,
    ];

    /// Threat score of this class at zero distance.
    pub fn base_threat(self) -> f64 {
        match self {
            TargetClass::Armor => 80.0,
            TargetClass::InfantryCarrier => 60.0,
            TargetClass::RotaryWing => 70.0,
            TargetClass::Unmanned => 40.0,
            TargetClass::LightVehicle => 30.0,
        }
    }

    /// Display tag.
    pub fn label(self) -> &'static str {
        match self {
            TargetClass::Armor => "TANK",
            TargetClass::InfantryCarrier => "APC",
            TargetClass::RotaryWing => "HELICOPTER",
            TargetClass::Unmanned => "DRONE",
            TargetClass::LightVehicle => "VEHICLE",
        }
    }
}

/// Ammunition type loaded in the gun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoType {
    /// Armour-piercing fin-stabilised discarding sabot.
    #[default]
    Apfsds,
    /// High-explosive anti-tank.
    Heat,
    /// High explosive.
    He,
    Smoke,
}

impl AmmoType {
    pub const ALL: [AmmoType; 4] = [
        AmmoType::Apfsds,
        AmmoType::Heat,
        AmmoType::He,
        AmmoType::Smoke,
    ];

    /// Static ballistic profile for this ammunition.
    pub fn profile(self) -> AmmoProfile {
        match self {
            AmmoType::Apfsds => AmmoProfile {
                muzzle_velocity: APFSDS_MUZZLE_VELOCITY,
                drag_coefficient: APFSDS_DRAG,
                mass_kg: APFSDS_MASS_KG,
            },
            AmmoType::Heat => AmmoProfile {
                muzzle_velocity: HEAT_MUZZLE_VELOCITY,
                drag_coefficient: HEAT_DRAG,
                mass_kg: HEAT_MASS_KG,
            },
            AmmoType::He => AmmoProfile {
                muzzle_velocity: HE_MUZZLE_VELOCITY,
                drag_coefficient: HE_DRAG,
                mass_kg: HE_MASS_KG,
            },
            AmmoType::Smoke => AmmoProfile {
                muzzle_velocity: SMOKE_MUZZLE_VELOCITY,
                drag_coefficient: SMOKE_DRAG,
                mass_kg: SMOKE_MASS_KG,
            },
        }
    }

    /// Upper-case display tag used in log messages.
    pub fn label(self) -> &'static str {
        match self {
            AmmoType::Apfsds => "APFSDS",
            AmmoType::Heat => "HEAT",
            AmmoType::He => "HE",
            AmmoType::Smoke => "SMOKE",
        }
    }
}

/// Turret engagement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurretPhase {
    /// No target selected.
    #[default]
    Idle,
    /// Target selected, not locked.
    Tracking,
    /// Locked with a valid solution.
    Locked,
    /// Shot in flight, awaiting resolution.
    Firing,
}

/// Weapon readiness, orthogonal to the turret phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponStatus {
    #[default]
    Ready,
    Reloading,
}

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Threat banding shown next to the score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn from_score(score: f64) -> Self {
        if score > THREAT_HIGH_THRESHOLD {
            ThreatLevel::High
        } else if score > THREAT_MEDIUM_THRESHOLD {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        }
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Hit,
    Miss,
}

/// Severity of an operator log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}
