//! # Booking Availability
//!
//! This crate implements the availability-check engine for the campground
//! booking platform: date-range validation, capacity filtering, conflict and
//! blackout detection, admin override policy, and site recommendation. The
//! engine is a pure computation layer over snapshots read through the
//! [`AvailabilityStore`] collaborator; it never writes.

/// Half-open date interval primitives shared across the engine
mod interval;
pub use interval::*;

/// Domain types, requests, results, and error enums
mod types;
pub use types::*;

/// Business-rule validation for availability requests
mod request;
pub use request::*;

/// Guest-capacity filtering of candidate campsites
mod capacity;
pub use capacity::*;

/// Reservation and blackout conflict detection
mod conflicts;
pub use conflicts::*;

/// Admin override reconciliation policy
mod policy;
pub use policy::*;

/// Site recommendation among allowed candidates
mod recommend;
pub use recommend::*;

/// Read-only storage collaborator contract and in-memory implementation
mod store;
pub use store::*;

/// The orchestrating availability service
mod service;
pub use service::*;
