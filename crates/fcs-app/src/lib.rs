//! Headless driver for the fire-control simulator.
//!
//! Runs the engine on its own frame-loop thread and exposes the latest
//! snapshot and a command channel to the caller.

pub mod game_loop;
pub mod state;

pub use fcs_core as core;
