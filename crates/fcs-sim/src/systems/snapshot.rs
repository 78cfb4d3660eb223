//! Snapshot system: queries the contact world and builds a complete FcsSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use fcs_core::enums::*;
use fcs_core::events::{AudioEvent, LogEntry};
use fcs_core::state::*;
use fcs_core::types::{FiringSolution, SimTime, TargetState, TrajectoryPoint};

use crate::engagement::ScoreState;
use crate::systems::contacts;
use crate::turret::Turret;

/// Everything the snapshot needs beyond the world itself.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: SimPhase,
    pub radar: RadarView,
    pub turret: &'a Turret,
    pub solution: Option<&'a FiringSolution>,
    pub trajectory: Vec<TrajectoryPoint>,
    pub settings: SettingsView,
    pub log: Vec<LogEntry>,
    pub audio_events: Vec<AudioEvent>,
    pub score: &'a ScoreState,
}

/// Build a complete FcsSnapshot from the current world state.
pub fn build_snapshot(world: &World, inputs: SnapshotInputs<'_>) -> FcsSnapshot {
    let selected_id = inputs
        .turret
        .selected
        .and_then(|entity| contacts::id_of(world, entity));

    let targets = contacts::all_states(world)
        .iter()
        .map(|target| {
            build_target(
                target,
                selected_id == Some(target.id),
                inputs.turret.locked,
                inputs.radar.range_km,
            )
        })
        .collect();

    FcsSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        targets,
        turret: TurretView {
            phase: inputs.turret.phase,
            weapon: inputs.turret.weapon_status(),
            azimuth_deg: inputs.turret.azimuth_deg,
            elevation_deg: inputs.turret.elevation_deg,
            rounds_remaining: inputs.turret.rounds_remaining,
            reload_ready: inputs.turret.reload_ready,
            locked: inputs.turret.locked,
            selected: selected_id.map(|id| id.to_string()),
        },
        radar: inputs.radar,
        solution: inputs.solution.copied(),
        trajectory: inputs.trajectory,
        settings: inputs.settings,
        log: inputs.log,
        audio_events: inputs.audio_events,
        score: ScoreView {
            shots_fired: inputs.score.shots_fired,
            hits: inputs.score.hits,
            misses: inputs.score.misses,
        },
    }
}

fn build_target(target: &TargetState, selected: bool, locked: bool, range_km: f64) -> TargetView {
    TargetView {
        id: target.id.to_string(),
        class: target.class,
        position: target.position,
        distance_km: target.distance_km,
        bearing_deg: target.bearing_deg,
        elevation_deg: target.elevation_deg,
        speed_mps: target.speed_mps,
        heading_rad: target.heading_rad,
        threat: target.threat,
        threat_level: ThreatLevel::from_score(target.threat),
        selected,
        locked: selected && locked,
        in_display_range: target.distance_km <= range_km,
    }
}
