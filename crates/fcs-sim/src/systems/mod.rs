//! Systems that operate on the contact world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all contact state lives in components.

pub mod cleanup;
pub mod contacts;
pub mod motion;
pub mod radar;
pub mod selection;
pub mod snapshot;
