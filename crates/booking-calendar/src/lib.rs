//! # Booking Calendar
//!
//! Interaction logic for the admin reservation calendar: pure drag/resize
//! date calculators and the ghost-state preview builder. Everything here
//! runs on every pointer-move event, so it is all O(1), allocation-light,
//! and side-effect free; no queries, no writes.

/// Drag and resize candidate-date calculators
mod drag;
pub use drag::*;

/// Ghost preview state for in-flight interactions
mod ghost;
pub use ghost::*;
