//! Simulation engine for the fire-control simulator.
//!
//! Owns the hecs world of contacts, runs systems once per display frame,
//! and produces FcsSnapshots for the display layer.

pub mod ballistics;
pub mod engagement;
pub mod engine;
pub mod event_log;
pub mod systems;
pub mod turret;
pub mod world_setup;

pub use engine::{FireControlEngine, SimConfig};
pub use fcs_core as core;
