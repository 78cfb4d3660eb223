//! Contact generation and spawn factories.
//!
//! Builds a batch of randomized contacts and inserts them into the world
//! with their component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fcs_core::components::{Contact, Kinematics, Polar, ThreatAssessment};
use fcs_core::constants::*;
use fcs_core::enums::TargetClass;
use fcs_core::types::{PlanarPosition, TargetId, TargetState};

/// Generate `count` random contacts within the sensor picture.
///
/// Identities are drawn from `next_id`, which keeps counting across calls
/// so labels are never reused within a session. The threat score is a
/// placeholder until the first motion update.
pub fn generate_targets(
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    count: usize,
    range_km: f64,
) -> Vec<TargetState> {
    let max_distance = (range_km * TARGET_MAX_DISTANCE_FRACTION).max(TARGET_MIN_DISTANCE_KM);

    (0..count)
        .map(|_| {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance: f64 = rng.gen_range(TARGET_MIN_DISTANCE_KM..=max_distance);
            let speed: f64 = rng.gen_range(TARGET_MIN_SPEED..TARGET_MAX_SPEED);
            let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let class = TargetClass::ALL[rng.gen_range(0..TargetClass::ALL.len())];
            let elevation: f64 =
                rng.gen_range(-TARGET_ELEVATION_SPREAD_DEG..TARGET_ELEVATION_SPREAD_DEG);
            let threat: f64 = rng.gen_range(0.0..THREAT_MAX);

            *next_id += 1;

            TargetState {
                id: TargetId(*next_id),
                class,
                position: PlanarPosition::from_polar(distance, angle),
                heading_rad: heading,
                speed_mps: speed,
                distance_km: distance,
                bearing_deg: angle.to_degrees(),
                elevation_deg: elevation,
                threat,
            }
        })
        .collect()
}

/// Spawn one contact entity from its state.
pub fn spawn_target(world: &mut World, target: &TargetState) -> hecs::Entity {
    world.spawn((
        Contact {
            id: target.id,
            class: target.class,
            elevation_deg: target.elevation_deg,
        },
        Kinematics {
            position: target.position,
            heading_rad: target.heading_rad,
            speed_mps: target.speed_mps,
        },
        Polar {
            distance_km: target.distance_km,
            bearing_deg: target.bearing_deg,
        },
        ThreatAssessment {
            score: target.threat,
        },
    ))
}

/// Generate and spawn a fresh batch of contacts.
pub fn populate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    count: usize,
    range_km: f64,
) {
    for target in generate_targets(rng, next_id, count, range_km) {
        spawn_target(world, &target);
    }
}
