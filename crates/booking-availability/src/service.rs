use chrono::Utc;
use tracing::{debug, info};

use crate::{
    AvailabilityRequest, AvailabilityResult, AvailabilityStore, StoreError, allowed_sites,
    detect_conflicts, filter_by_capacity, recommend, validate_request,
};

/// Failures that escape [`AvailabilityService::check_availability`]. Business
/// outcomes (invalid request, no site free) never appear here; they come back
/// as a structured [`AvailabilityResult`].
#[derive(thiserror::Error, Debug)]
pub enum AvailabilityError {
    /// The storage collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The availability orchestrator: validation, capacity filtering, conflict
/// detection, override policy, and recommendation over one read-only store.
///
/// The answer is advisory. Reads are independent queries with no lock held
/// across them, so two concurrent checks for the same site and dates can
/// both see "available"; the authoritative overlap check belongs to the
/// storage layer at commit time (e.g. an exclusion constraint on
/// `(campsite_id, interval)`).
pub struct AvailabilityService<S: AvailabilityStore> {
    store: S,
}

impl<S: AvailabilityStore> AvailabilityService<S> {
    /// Create a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check whether the requested stay can be booked and recommend a site.
    ///
    /// Expected business failures (bad dates, no capacity, conflicts,
    /// blackouts) return `Ok` with `available = false` and a displayable
    /// message; only storage failures propagate as an error.
    pub fn check_availability(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResult, AvailabilityError> {
        let today = Utc::now().date_naive();
        if let Err(err) = validate_request(request, today) {
            debug!("Availability request rejected: {}", err);
            return Ok(AvailabilityResult::unavailable(err.to_string(), vec![]));
        }

        let interval = request.interval();
        let candidates = self.store.active_campsites(request.campsite_id)?;
        let eligible = filter_by_capacity(candidates, request.guest_count);

        if eligible.is_empty() {
            let message = if request.campsite_id.is_some() {
                format!(
                    "Campsite not found or cannot accommodate {} guests",
                    request.guest_count
                )
            } else {
                format!("No campsite can accommodate {} guests", request.guest_count)
            };
            debug!("No capacity-eligible campsites: {}", message);
            return Ok(AvailabilityResult::unavailable(message, vec![]));
        }

        let reservations = self.store.occupying_reservations_overlapping(interval)?;
        let blackouts = self.store.blackouts_overlapping(interval)?;
        let report = detect_conflicts(&eligible, interval, &reservations, &blackouts);

        debug!(
            "Detected {} conflicts across {} eligible sites for {} to {}",
            report.conflicts.len(),
            eligible.len(),
            interval.start,
            interval.end
        );

        let flags = request.overrides;
        let blocked_by_reservation = !flags.force_conflict
            && eligible.iter().any(|site| report.has_conflict(site.id));
        let allowed = allowed_sites(eligible, &report, flags);

        match recommend(&allowed) {
            Some(site_id) => {
                info!(
                    "Stay {} to {} available, recommending campsite {}",
                    interval.start, interval.end, site_id
                );
                Ok(AvailabilityResult::available(site_id, report.conflicts))
            }
            None => {
                // Most specific reason first: reservation conflicts, then
                // blackouts. Capacity was already handled above.
                let message = if blocked_by_reservation {
                    "Requested dates conflict with existing reservations"
                } else {
                    "Requested dates fall within a blackout period"
                };
                info!(
                    "Stay {} to {} unavailable: {}",
                    interval.start, interval.end, message
                );
                Ok(AvailabilityResult::unavailable(message, report.conflicts))
            }
        }
    }
}
