use crate::Campsite;

/// Narrow candidate campsites to those that can hold the party.
///
/// Keeps active sites with `max_guests >= guest_count`, ordered by
/// `sort_order` ascending. Inactive sites are dropped here even if the
/// store already filtered them, so in-memory callers get the same answer.
pub fn filter_by_capacity(campsites: Vec<Campsite>, guest_count: i32) -> Vec<Campsite> {
    let mut eligible: Vec<Campsite> = campsites
        .into_iter()
        .filter(|site| site.is_active && site.max_guests >= guest_count)
        .collect();

    eligible.sort_by_key(|site| site.sort_order);
    eligible
}
