use uuid::Uuid;

use crate::{BlackoutDate, Campsite, DateInterval, Reservation};

/// Infrastructure failures from the storage collaborator. Distinct from a
/// business "unavailable" outcome so callers can tell "no sites for these
/// dates" apart from "something broke".
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Backing store unreachable or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// A row could not be decoded into a domain type
    #[error("Data format error: {0}")]
    DataFormat(String),
}

/// Read-only data access the availability engine requires.
///
/// Implementations issue ordinary independent queries; no lock is held
/// across them and the engine never writes. The production implementation
/// lives in the storage layer; [`InMemoryStore`] serves tests and embedded
/// callers.
pub trait AvailabilityStore {
    /// List active campsites, optionally restricted to one id, ordered by
    /// `sort_order` ascending.
    fn active_campsites(&self, campsite_id: Option<Uuid>) -> Result<Vec<Campsite>, StoreError>;

    /// List occupying reservations whose interval overlaps the given one.
    fn occupying_reservations_overlapping(
        &self,
        interval: DateInterval,
    ) -> Result<Vec<Reservation>, StoreError>;

    /// List blackout rows whose interval overlaps the given one, including
    /// global blackouts.
    fn blackouts_overlapping(
        &self,
        interval: DateInterval,
    ) -> Result<Vec<BlackoutDate>, StoreError>;
}

/// Vec-backed store over plain row snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Campsite rows
    pub campsites: Vec<Campsite>,
    /// Reservation rows
    pub reservations: Vec<Reservation>,
    /// Blackout rows
    pub blackouts: Vec<BlackoutDate>,
}

impl InMemoryStore {
    /// Build a store from row snapshots.
    pub fn new(
        campsites: Vec<Campsite>,
        reservations: Vec<Reservation>,
        blackouts: Vec<BlackoutDate>,
    ) -> Self {
        Self {
            campsites,
            reservations,
            blackouts,
        }
    }
}

impl AvailabilityStore for InMemoryStore {
    fn active_campsites(&self, campsite_id: Option<Uuid>) -> Result<Vec<Campsite>, StoreError> {
        let mut sites: Vec<Campsite> = self
            .campsites
            .iter()
            .filter(|site| site.is_active)
            .filter(|site| campsite_id.is_none_or(|id| site.id == id))
            .cloned()
            .collect();

        sites.sort_by_key(|site| site.sort_order);
        Ok(sites)
    }

    fn occupying_reservations_overlapping(
        &self,
        interval: DateInterval,
    ) -> Result<Vec<Reservation>, StoreError> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.status.is_occupying() && r.interval.overlaps(&interval))
            .cloned()
            .collect())
    }

    fn blackouts_overlapping(
        &self,
        interval: DateInterval,
    ) -> Result<Vec<BlackoutDate>, StoreError> {
        Ok(self
            .blackouts
            .iter()
            .filter(|b| b.interval.overlaps(&interval))
            .cloned()
            .collect())
    }
}
