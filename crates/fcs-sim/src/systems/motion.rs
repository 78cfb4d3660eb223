//! Contact motion update.
//!
//! Advances every contact along its heading, re-derives range and bearing
//! from the new position, occasionally applies a course correction and
//! re-scores the threat.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use fcs_core::components::{Contact, Kinematics, Polar, ThreatAssessment};
use fcs_core::constants::*;
use fcs_core::enums::TargetClass;

/// Run one motion step for all contacts.
///
/// `dt_scale` multiplies the per-frame displacement; 1.0 is one display frame.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt_scale: f64, sensor_range_km: f64) {
    for (_entity, (contact, kin, polar, threat)) in world.query_mut::<(
        &Contact,
        &mut Kinematics,
        &mut Polar,
        &mut ThreatAssessment,
    )>() {
        let step_km = kin.speed_mps * M_TO_KM * VISUAL_SLOWDOWN * dt_scale;
        kin.position.x_km += kin.heading_rad.cos() * step_km;
        kin.position.y_km += kin.heading_rad.sin() * step_km;

        polar.distance_km = kin.position.distance_km();
        polar.bearing_deg = kin.position.bearing_deg();

        if rng.gen_bool(COURSE_CHANGE_PROBABILITY) {
            let delta = (rng.gen::<f64>() - 0.5) * COURSE_CHANGE_SPAN;
            kin.heading_rad = (kin.heading_rad + delta).rem_euclid(std::f64::consts::TAU);
        }

        threat.score = threat_score(contact.class, polar.distance_km, sensor_range_km);
    }
}

/// Threat score for a contact: class baseline falling off linearly to zero at
/// twice the sensor range. Clamped to [0, 100] for contacts beyond that.
pub fn threat_score(class: TargetClass, distance_km: f64, sensor_range_km: f64) -> f64 {
    let falloff = 1.0 - distance_km / (2.0 * sensor_range_km);
    (class.base_threat() * falloff).clamp(0.0, THREAT_MAX)
}
