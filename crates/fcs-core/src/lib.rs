//! Core types and definitions for the fire-control simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, errors and constants.
//! It has no dependency on any runtime or display framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{FcsError, Result};

#[cfg(test)]
mod tests;
