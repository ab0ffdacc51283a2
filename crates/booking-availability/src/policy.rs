use crate::{Campsite, ConflictReport, OverrideFlags};

/// The override truth table for one site:
/// `(has_conflict && !force_conflict) || (has_blackout && !override_blackout)`.
///
/// Each flag bypasses only its own conflict type.
pub fn is_blocked(has_conflict: bool, has_blackout: bool, flags: OverrideFlags) -> bool {
    (has_conflict && !flags.force_conflict) || (has_blackout && !flags.override_blackout)
}

/// Apply the override policy to the candidate list, keeping the capacity
/// filter's ordering for sites that survive.
pub fn allowed_sites(
    candidates: Vec<Campsite>,
    report: &ConflictReport,
    flags: OverrideFlags,
) -> Vec<Campsite> {
    candidates
        .into_iter()
        .filter(|site| !is_blocked(report.has_conflict(site.id), report.has_blackout(site.id), flags))
        .collect()
}
