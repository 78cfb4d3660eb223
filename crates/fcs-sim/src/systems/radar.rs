//! Radar scope sweep and range control.

use fcs_core::constants::*;

/// Advance the sweep line by one frame, wrapping to zero after a full turn.
pub fn advance_sweep(sweep_angle: &mut f64) {
    *sweep_angle += RADAR_SWEEP_STEP;
    if *sweep_angle > std::f64::consts::TAU {
        *sweep_angle = 0.0;
    }
}

/// Apply a range step, clamped to the selectable band.
pub fn adjust_range(range_km: f64, delta_km: f64) -> f64 {
    (range_km + delta_km).clamp(RADAR_MIN_RANGE_KM, RADAR_MAX_RANGE_KM)
}

/// Project a planar position (km) to scope pixels relative to the centre.
pub fn to_scope_px(x_km: f64, y_km: f64, range_km: f64) -> (f64, f64) {
    (
        x_km / range_km * RADAR_DISPLAY_RADIUS_PX,
        y_km / range_km * RADAR_DISPLAY_RADIUS_PX,
    )
}
