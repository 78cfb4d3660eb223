//! Simulation constants and tuning parameters.

/// Display frame rate the engine is stepped at (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Physics ---

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Sea-level air density (kg/m³).
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Temperature lapse coefficient used by the air density estimate.
pub const AIR_DENSITY_LAPSE: f64 = 0.0065;

/// Standard sea-level temperature (K).
pub const STANDARD_TEMPERATURE_K: f64 = 288.15;

// --- Radar ---

/// Default sensor range (km).
pub const RADAR_DEFAULT_RANGE_KM: f64 = 10.0;

/// Minimum selectable sensor range (km).
pub const RADAR_MIN_RANGE_KM: f64 = 5.0;

/// Maximum selectable sensor range (km).
pub const RADAR_MAX_RANGE_KM: f64 = 50.0;

/// Sweep advance per running frame (radians).
pub const RADAR_SWEEP_STEP: f64 = 0.05;

/// Radius of the PPI scope on screen (pixels).
pub const RADAR_DISPLAY_RADIUS_PX: f64 = 180.0;

/// Click-to-select capture radius (pixels).
pub const SELECT_RADIUS_PX: f64 = 20.0;

// --- Target generation ---

/// Contacts created at scenario start or reset.
pub const DEFAULT_TARGET_COUNT: usize = 5;

/// Closest spawn distance (km).
pub const TARGET_MIN_DISTANCE_KM: f64 = 1.0;

/// Farthest spawn distance as a fraction of sensor range.
pub const TARGET_MAX_DISTANCE_FRACTION: f64 = 0.8;

/// Slowest contact speed (m/s).
pub const TARGET_MIN_SPEED: f64 = 10.0;

/// Fastest contact speed, exclusive (m/s).
pub const TARGET_MAX_SPEED: f64 = 40.0;

/// Elevation angle spread around the horizon (degrees).
pub const TARGET_ELEVATION_SPREAD_DEG: f64 = 15.0;

// --- Target motion ---

/// Metres to kilometres.
pub const M_TO_KM: f64 = 0.001;

/// Slowdown applied to per-frame displacement so contacts crawl on the scope.
pub const VISUAL_SLOWDOWN: f64 = 0.1;

/// Per-frame probability of a course correction.
pub const COURSE_CHANGE_PROBABILITY: f64 = 0.01;

/// Full width of a course correction (radians); the delta is centred on zero.
pub const COURSE_CHANGE_SPAN: f64 = 0.5;

// --- Threat ---

/// Score above which a contact is rated high threat.
pub const THREAT_HIGH_THRESHOLD: f64 = 70.0;

/// Score above which a contact is rated medium threat.
pub const THREAT_MEDIUM_THRESHOLD: f64 = 40.0;

/// Maximum threat score.
pub const THREAT_MAX: f64 = 100.0;

// --- Weapon ---

/// Rounds loaded at scenario start or reset.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Cooldown after each shot before the weapon is ready again (seconds).
pub const RELOAD_COOLDOWN_SECS: f64 = 2.5;

/// Delay between firing and hit resolution (seconds).
pub const SHOT_RESOLUTION_DELAY_SECS: f64 = 2.0;

/// Distance at which the hit probability law reaches its floor (m).
pub const HIT_PROBABILITY_FALLOFF_M: f64 = 5000.0;

/// Hit probability floor.
pub const HIT_PROBABILITY_FLOOR: f64 = 0.3;

// --- Solver ---

/// Smallest effective engagement distance the solver will use (m).
pub const MIN_EFFECTIVE_DISTANCE_M: f64 = 1.0;

/// Sampling interval of the trajectory preview (seconds).
pub const TRAJECTORY_TIMESTEP_SECS: f64 = 0.05;

// --- Ammunition profiles ---

pub const APFSDS_MUZZLE_VELOCITY: f64 = 1750.0;
pub const APFSDS_DRAG: f64 = 0.92;
pub const APFSDS_MASS_KG: f64 = 8.5;

pub const HEAT_MUZZLE_VELOCITY: f64 = 1140.0;
pub const HEAT_DRAG: f64 = 0.85;
pub const HEAT_MASS_KG: f64 = 15.0;

pub const HE_MUZZLE_VELOCITY: f64 = 900.0;
pub const HE_DRAG: f64 = 0.80;
pub const HE_MASS_KG: f64 = 23.0;

pub const SMOKE_MUZZLE_VELOCITY: f64 = 700.0;
pub const SMOKE_DRAG: f64 = 0.75;
pub const SMOKE_MASS_KG: f64 = 18.0;

// --- Environment defaults ---

/// Default ambient temperature (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 15.0;
