use uuid::Uuid;

use crate::Campsite;

/// Pick one site to recommend from the allowed set.
///
/// Canonical policy: lowest `sort_order` wins. The list is re-sorted here
/// rather than trusting caller ordering, so the choice is stable no matter
/// which path produced the candidates.
pub fn recommend(allowed: &[Campsite]) -> Option<Uuid> {
    allowed
        .iter()
        .min_by_key(|site| site.sort_order)
        .map(|site| site.id)
}
