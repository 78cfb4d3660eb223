//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TargetClass;
use crate::types::{PlanarPosition, TargetId};

/// Identity and immutable attributes of a contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Contact {
    pub id: TargetId,
    pub class: TargetClass,
    /// Elevation angle (degrees). No vertical motion model, so fixed at creation.
    pub elevation_deg: f64,
}

/// Mutable motion state. Only the motion update writes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: PlanarPosition,
    /// Heading (radians).
    pub heading_rad: f64,
    /// Speed (m/s).
    pub speed_mps: f64,
}

/// Polar coordinates derived from `Kinematics::position`, recomputed every frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Polar {
    pub distance_km: f64,
    pub bearing_deg: f64,
}

/// Derived threat score in [0, 100].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ThreatAssessment {
    pub score: f64,
}
