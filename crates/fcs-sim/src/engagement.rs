//! Engagement bookkeeping: delayed events and the running score.
//!
//! Stored in `FireControlEngine`, NOT as ECS entities.

use fcs_core::constants::{HIT_PROBABILITY_FALLOFF_M, HIT_PROBABILITY_FLOOR};
use fcs_core::enums::ShotResult;
use fcs_core::types::TargetId;

/// A round in flight, waiting for its resolution delay to elapse.
#[derive(Debug, Clone)]
pub struct PendingShot {
    /// The hecs entity fired upon.
    pub entity: hecs::Entity,
    /// Identity of the target fired upon.
    pub target_id: TargetId,
    /// Hit probability at the moment of firing.
    pub hit_probability: f64,
    /// Uniform draw in [0, 1) taken at the moment of firing.
    pub roll: f64,
}

impl PendingShot {
    pub fn result(&self) -> ShotResult {
        if self.roll < self.hit_probability {
            ShotResult::Hit
        } else {
            ShotResult::Miss
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventKind {
    ShotResolution(PendingShot),
    ReloadComplete,
}

/// A one-shot callback due at a given frame.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub due_tick: u64,
    /// Scenario generation at scheduling time. A mismatch means the scenario
    /// was reset while the event was pending.
    pub generation: u64,
    pub kind: EventKind,
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub hits: u32,
    pub misses: u32,
}

/// Chance of a hit at `distance_m`, decaying linearly to a floor.
pub fn hit_probability(distance_m: f64) -> f64 {
    (1.0 - distance_m / HIT_PROBABILITY_FALLOFF_M).max(HIT_PROBABILITY_FLOOR)
}

/// Frames needed to cover `secs` of simulation time.
pub fn frames_for(secs: f64) -> u64 {
    (secs * fcs_core::constants::FRAME_RATE as f64).round() as u64
}
