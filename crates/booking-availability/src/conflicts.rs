use std::collections::HashSet;

use uuid::Uuid;

use crate::{BlackoutDate, Campsite, Conflict, ConflictKind, DateInterval, Reservation};

/// Aggregated conflicts for a set of candidate sites over one interval
#[derive(Debug, Clone, Default)]
pub struct ConflictReport {
    /// Sites with at least one overlapping occupying reservation
    pub conflicted_sites: HashSet<Uuid>,
    /// Sites affected by an overlapping blackout (site-specific or global)
    pub blackout_sites: HashSet<Uuid>,
    /// Every conflict found, with human-readable detail
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Whether the given site is touched by a reservation conflict.
    pub fn has_conflict(&self, site_id: Uuid) -> bool {
        self.conflicted_sites.contains(&site_id)
    }

    /// Whether the given site is touched by a blackout.
    pub fn has_blackout(&self, site_id: Uuid) -> bool {
        self.blackout_sites.contains(&site_id)
    }
}

/// Partition reservations and blackouts into per-site conflict sets.
///
/// Only occupying reservations count, and only against their assigned site;
/// unassigned reservations block nothing. A blackout with no campsite is
/// global: it marks every candidate site, not some separate unassigned
/// bucket. The half-open overlap test is re-applied here regardless of any
/// pre-filtering done by the store.
pub fn detect_conflicts(
    candidates: &[Campsite],
    interval: DateInterval,
    reservations: &[Reservation],
    blackouts: &[BlackoutDate],
) -> ConflictReport {
    let candidate_ids: HashSet<Uuid> = candidates.iter().map(|site| site.id).collect();
    let mut report = ConflictReport::default();

    for reservation in reservations {
        if !reservation.status.is_occupying() || !reservation.interval.overlaps(&interval) {
            continue;
        }
        let Some(site_id) = reservation.campsite_id else {
            continue;
        };
        if !candidate_ids.contains(&site_id) {
            continue;
        }

        report.conflicted_sites.insert(site_id);
        report.conflicts.push(Conflict {
            id: reservation.id,
            campsite_id: Some(site_id),
            kind: ConflictKind::Reservation,
            detail: format!(
                "Reserved by {} from {} to {}",
                reservation.guest_name, reservation.interval.start, reservation.interval.end
            ),
        });
    }

    for blackout in blackouts {
        if !blackout.interval.overlaps(&interval) {
            continue;
        }

        let reason = blackout.reason.as_deref().unwrap_or("Blackout period");
        match blackout.campsite_id {
            Some(site_id) => {
                if !candidate_ids.contains(&site_id) {
                    continue;
                }
                report.blackout_sites.insert(site_id);
                report.conflicts.push(Conflict {
                    id: blackout.id,
                    campsite_id: Some(site_id),
                    kind: ConflictKind::Blackout,
                    detail: format!(
                        "{} from {} to {}",
                        reason, blackout.interval.start, blackout.interval.end
                    ),
                });
            }
            None => {
                // Global blackout: every candidate site is affected
                report.blackout_sites.extend(candidate_ids.iter().copied());
                report.conflicts.push(Conflict {
                    id: blackout.id,
                    campsite_id: None,
                    kind: ConflictKind::Blackout,
                    detail: format!(
                        "{} (all campsites) from {} to {}",
                        reason, blackout.interval.start, blackout.interval.end
                    ),
                });
            }
        }
    }

    report
}
