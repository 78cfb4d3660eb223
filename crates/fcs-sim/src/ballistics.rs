//! Ballistic solver and trajectory preview.
//!
//! Pure functions over plain data, with no ECS or display access. The solver is a
//! flat-fire approximation: no drag, no Coriolis, no spin drift.

use glam::DVec2;

use fcs_core::constants::*;
use fcs_core::error::{FcsError, Result};
use fcs_core::types::{FiringSolution, SolverInputs, TargetState, TrajectoryPoint};

/// Compute a firing solution for `target` with the given ammunition and environment.
///
/// Fails with `NoTargetSelected` when no target is bound.
///
/// Closure during flight is applied once, as a first-order correction to the
/// engagement distance. It is not iterated to a true intercept point.
pub fn solve(target: Option<&TargetState>, inputs: &SolverInputs) -> Result<FiringSolution> {
    let target = target.ok_or(FcsError::NoTargetSelected)?;
    let muzzle_velocity = inputs.ammo.profile().muzzle_velocity;

    let distance = target.distance_km * 1000.0;

    // Positive when the target is opening along the line of sight.
    let los_bearing = target.position.y_km.atan2(target.position.x_km);
    let closure = target.speed_mps * (target.heading_rad - los_bearing).cos();

    let effective_distance =
        (distance + closure * (distance / muzzle_velocity)).max(MIN_EFFECTIVE_DISTANCE_M);
    let time_of_flight = effective_distance / muzzle_velocity;

    let drop = 0.5 * GRAVITY * time_of_flight * time_of_flight;
    let elevation_deg = (drop / effective_distance).atan().to_degrees() + target.elevation_deg;

    let travel = target.velocity() * time_of_flight;
    let lead_distance = travel.length();
    let lead_angle_deg = travel
        .y
        .atan2(effective_distance + travel.x)
        .to_degrees();

    // Small-angle crosswind drift, not a deflection model.
    let wind_drift = (inputs.wind_speed_mps * time_of_flight / effective_distance)
        * (inputs.wind_direction_deg - target.bearing_deg)
            .to_radians()
            .sin();
    let wind_comp_deg = wind_drift.to_degrees();

    Ok(FiringSolution {
        target: target.id,
        azimuth_deg: target.bearing_deg + lead_angle_deg + wind_comp_deg,
        elevation_deg,
        lead_mils: lead_distance / effective_distance * 1000.0,
        time_of_flight_secs: time_of_flight,
        effective_distance_m: effective_distance,
        muzzle_velocity,
        air_density: air_density(inputs.temperature_c),
    })
}

/// Air density estimate from ambient temperature (kg/m³).
///
/// Reported alongside the solution; nothing downstream consumes it yet.
pub fn air_density(temperature_c: f64) -> f64 {
    AIR_DENSITY_SEA_LEVEL * (1.0 - temperature_c * AIR_DENSITY_LAPSE / STANDARD_TEMPERATURE_K)
}

/// Lazily sampled projectile path for display.
///
/// Samples every `TRAJECTORY_TIMESTEP_SECS` from launch to the solved time of
/// flight. Cloning or calling [`restart`](Self::restart) replays it from launch.
#[derive(Debug, Clone)]
pub struct TrajectoryPreview {
    muzzle_velocity: f64,
    elevation_rad: f64,
    direction: DVec2,
    samples: usize,
    next: usize,
}

impl TrajectoryPreview {
    pub fn new(solution: &FiringSolution) -> Self {
        let tof = solution.time_of_flight_secs.max(0.0);
        // Tolerate representation error so an exact multiple keeps its endpoint.
        let samples = (tof / TRAJECTORY_TIMESTEP_SECS + 1e-9).floor() as usize + 1;
        Self {
            muzzle_velocity: solution.muzzle_velocity,
            elevation_rad: solution.elevation_deg.to_radians(),
            direction: DVec2::from_angle(solution.azimuth_deg.to_radians()),
            samples,
            next: 0,
        }
    }

    /// Rewind to the launch sample.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    fn point_at(&self, time_secs: f64) -> TrajectoryPoint {
        let (sin_el, cos_el) = self.elevation_rad.sin_cos();
        let downrange = self.muzzle_velocity * cos_el * time_secs;
        let height = self.muzzle_velocity * sin_el * time_secs
            - 0.5 * GRAVITY * time_secs * time_secs;
        TrajectoryPoint {
            time_secs,
            ground: self.direction * downrange,
            height_m: height,
        }
    }
}

impl Iterator for TrajectoryPreview {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.samples {
            return None;
        }
        let t = self.next as f64 * TRAJECTORY_TIMESTEP_SECS;
        self.next += 1;
        Some(self.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectoryPreview {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fcs_core::enums::{AmmoType, TargetClass};
    use fcs_core::types::{PlanarPosition, TargetId};

    fn target_at(x_km: f64, y_km: f64, heading_rad: f64, speed_mps: f64) -> TargetState {
        let position = PlanarPosition::new(x_km, y_km);
        TargetState {
            id: TargetId(7),
            class: TargetClass::Armor,
            position,
            heading_rad,
            speed_mps,
            distance_km: position.distance_km(),
            bearing_deg: position.bearing_deg(),
            elevation_deg: 0.0,
            threat: 50.0,
        }
    }

    fn he_calm() -> SolverInputs {
        SolverInputs {
            ammo: AmmoType::He,
            wind_speed_mps: 0.0,
            wind_direction_deg: 0.0,
            temperature_c: 15.0,
        }
    }

    #[test]
    fn solve_without_target_fails() {
        assert_eq!(
            solve(None, &he_calm()),
            Err(FcsError::NoTargetSelected)
        );
    }

    #[test]
    fn stationary_target_in_calm_air_has_no_lead() {
        let target = target_at(3.0, 4.0, 1.0, 0.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();

        assert_eq!(sol.lead_mils, 0.0);
        assert_eq!(sol.azimuth_deg, target.bearing_deg);
        assert_abs_diff_eq!(sol.effective_distance_m, 5000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sol.time_of_flight_secs, 5000.0 / 900.0, epsilon = 1e-12);
    }

    #[test]
    fn receding_target_on_line_of_sight() {
        // 1000 m out on bearing 0°, driving straight away at 20 m/s.
        let target = target_at(1.0, 0.0, 0.0, 20.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();

        let expected_distance = 1000.0 + 20.0 * (1000.0 / 900.0);
        assert_abs_diff_eq!(sol.effective_distance_m, expected_distance, epsilon = 1e-9);
        assert!(sol.effective_distance_m > 1000.0);
        assert_abs_diff_eq!(
            sol.time_of_flight_secs,
            sol.effective_distance_m / 900.0,
            epsilon = 1e-12
        );
        // Motion is collinear with the line of sight.
        assert_abs_diff_eq!(sol.azimuth_deg, 0.0, epsilon = 1e-12);
        assert!(sol.elevation_deg > 0.0);

        let t = sol.time_of_flight_secs;
        let drop = 0.5 * GRAVITY * t * t;
        assert_abs_diff_eq!(
            sol.elevation_deg,
            (drop / expected_distance).atan().to_degrees(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            sol.lead_mils,
            20.0 * t / expected_distance * 1000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn approaching_target_shortens_engagement_distance() {
        let target = target_at(2.0, 0.0, std::f64::consts::PI, 30.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();
        assert!(sol.effective_distance_m < 2000.0);
    }

    #[test]
    fn effective_distance_never_below_one_metre() {
        let target = target_at(0.0001, 0.0, std::f64::consts::PI, 40.0);
        let inputs = SolverInputs {
            ammo: AmmoType::Smoke,
            ..he_calm()
        };
        let sol = solve(Some(&target), &inputs).unwrap();
        assert!(sol.effective_distance_m >= MIN_EFFECTIVE_DISTANCE_M);
        assert!(sol.time_of_flight_secs.is_finite());
    }

    #[test]
    fn crossing_target_leads_in_direction_of_travel() {
        // On the x axis, moving toward +y.
        let target = target_at(2.0, 0.0, std::f64::consts::FRAC_PI_2, 30.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();
        assert!(sol.azimuth_deg > 0.0);
        assert!(sol.lead_mils > 0.0);
    }

    #[test]
    fn target_elevation_adds_to_gun_elevation() {
        let mut target = target_at(2.0, 0.0, 0.0, 0.0);
        let flat = solve(Some(&target), &he_calm()).unwrap();
        target.elevation_deg = 5.0;
        let raised = solve(Some(&target), &he_calm()).unwrap();
        assert_abs_diff_eq!(raised.elevation_deg - flat.elevation_deg, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn crosswind_shifts_azimuth() {
        let target = target_at(2.0, 0.0, 0.0, 0.0);
        let inputs = SolverInputs {
            wind_speed_mps: 10.0,
            wind_direction_deg: 90.0,
            ..he_calm()
        };
        let sol = solve(Some(&target), &inputs).unwrap();
        let t = sol.time_of_flight_secs;
        let expected = (10.0 * t / sol.effective_distance_m).to_degrees();
        assert_abs_diff_eq!(sol.azimuth_deg, expected, epsilon = 1e-12);

        // Head wind along the line of sight contributes nothing.
        let head = SolverInputs {
            wind_direction_deg: 0.0,
            ..inputs
        };
        let sol = solve(Some(&target), &head).unwrap();
        assert_abs_diff_eq!(sol.azimuth_deg, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn faster_ammunition_flies_flatter() {
        let target = target_at(4.0, 0.0, 0.0, 0.0);
        let slow = solve(Some(&target), &he_calm()).unwrap();
        let fast = solve(
            Some(&target),
            &SolverInputs {
                ammo: AmmoType::Apfsds,
                ..he_calm()
            },
        )
        .unwrap();
        assert!(fast.time_of_flight_secs < slow.time_of_flight_secs);
        assert!(fast.elevation_deg < slow.elevation_deg);
    }

    #[test]
    fn air_density_falls_with_temperature() {
        assert_abs_diff_eq!(air_density(0.0), AIR_DENSITY_SEA_LEVEL, epsilon = 1e-12);
        assert!(air_density(35.0) < air_density(-10.0));
    }

    #[test]
    fn preview_spans_time_of_flight() {
        let target = target_at(1.8, 0.0, 0.0, 0.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();
        let points: Vec<_> = TrajectoryPreview::new(&sol).collect();

        // 2.0 s flight sampled every 0.05 s, both ends included.
        assert_abs_diff_eq!(sol.time_of_flight_secs, 2.0, epsilon = 1e-12);
        assert_eq!(points.len(), 41);
        assert_eq!(points[0].time_secs, 0.0);
        assert_eq!(points[0].ground, DVec2::ZERO);
        assert_abs_diff_eq!(points[40].time_secs, 2.0, epsilon = 1e-9);

        // Elevation was chosen to cancel the drop, so the shell comes back to
        // launch height at the target.
        let last = points[40];
        assert_abs_diff_eq!(last.height_m, 0.0, epsilon = 0.5);
        assert!(last.ground.x > 1790.0 && last.ground.x < 1810.0);
        assert!(last.ground.y.abs() < 1e-9);
        assert!(points.iter().all(|p| p.height_m > -0.01));
    }

    #[test]
    fn preview_is_restartable() {
        let target = target_at(3.0, 3.0, 0.3, 25.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();

        let mut preview = TrajectoryPreview::new(&sol);
        let first: Vec<_> = preview.by_ref().collect();
        assert!(preview.next().is_none());

        preview.restart();
        assert_eq!(preview.len(), first.len());
        let second: Vec<_> = preview.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn preview_follows_solved_azimuth() {
        let target = target_at(0.0, 2.0, 0.0, 0.0);
        let sol = solve(Some(&target), &he_calm()).unwrap();
        let last = TrajectoryPreview::new(&sol).last().unwrap();
        assert!(last.ground.x.abs() < 1e-6);
        assert!(last.ground.y > 1900.0);
    }
}
