use booking_availability::DateInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DragDates;

/// The kind of interaction producing a ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Whole-bar move, duration invariant
    Move,
    /// Single-edge resize
    Resize,
}

/// An ephemeral preview of an in-flight move or resize.
///
/// A plain serializable value with no reference back to any UI state. It is
/// built fresh on every interaction tick, never persisted, and discarded
/// when the interaction ends; the commit goes through a separate write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGhostState {
    /// Move or resize
    pub mode: DragMode,
    /// Campsite row the ghost is rendered on
    pub campsite_id: Uuid,
    /// Candidate stay being previewed
    pub interval: DateInterval,
    /// Whether the candidate could be committed as-is
    pub is_valid: bool,
    /// Displayable reason when invalid
    pub error_message: Option<String>,
}

/// Package a candidate interval and validity into a ghost.
///
/// Purely assembles its inputs: `is_valid` is simply the absence of an
/// error message. No conflict check happens here; callers wanting live
/// conflict feedback run the candidate through the conflict detector and
/// override policy first and pass the resulting message in.
pub fn build_ghost_state(
    mode: DragMode,
    campsite_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    error_message: Option<String>,
) -> DragGhostState {
    DragGhostState {
        mode,
        campsite_id,
        interval: DateInterval::new(start, end),
        is_valid: error_message.is_none(),
        error_message,
    }
}

/// Fold a calculator result straight into a ghost for the common case where
/// no extra conflict feedback is layered on.
pub fn ghost_from_drag(mode: DragMode, campsite_id: Uuid, dates: &DragDates) -> DragGhostState {
    build_ghost_state(mode, campsite_id, dates.start, dates.end, dates.error.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalendarItem, OUT_OF_MONTH_RANGE, ResizeEdge, compute_drag_dates, compute_resize_dates};
    use booking_availability::{
        Campsite, Conflict, ConflictKind, OverrideFlags, Reservation, ReservationStatus,
        detect_conflicts, is_blocked,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ghost_validity_tracks_error_message() {
        let site = Uuid::new_v4();

        let ghost = build_ghost_state(DragMode::Move, site, date(2024, 1, 5), date(2024, 1, 8), None);
        assert!(ghost.is_valid);
        assert_eq!(ghost.interval.nights(), 3);

        let ghost = build_ghost_state(
            DragMode::Resize,
            site,
            date(2024, 1, 5),
            date(2024, 1, 8),
            Some(OUT_OF_MONTH_RANGE.to_string()),
        );
        assert!(!ghost.is_valid);
        assert_eq!(ghost.error_message.as_deref(), Some(OUT_OF_MONTH_RANGE));
    }

    fn campsite(name: &str) -> Campsite {
        Campsite {
            id: Uuid::new_v4(),
            name: name.to_string(),
            max_guests: 6,
            sort_order: 1,
            is_active: true,
        }
    }

    fn conflict_message(conflicts: &[Conflict]) -> Option<String> {
        conflicts.first().map(|c| c.detail.clone())
    }

    #[test]
    fn test_drag_then_conflict_check_then_ghost() {
        // Dragging one bar onto another bar's dates: the calculator accepts
        // the move, the conflict detector flags it, and the ghost carries
        // the conflict detail
        let site = campsite("S1");
        let month_start = date(2024, 1, 1);
        let month_end = date(2024, 2, 1);

        let other = Reservation {
            id: Uuid::new_v4(),
            campsite_id: Some(site.id),
            guest_name: "Jane Roe".to_string(),
            interval: DateInterval::new(date(2024, 1, 12), date(2024, 1, 15)),
            status: ReservationStatus::Confirmed,
        };
        let dragged = CalendarItem {
            campsite_id: site.id,
            interval: DateInterval::new(date(2024, 1, 5), date(2024, 1, 8)),
        };

        let dates = compute_drag_dates(&dragged, 0, date(2024, 1, 13), month_start, month_end);
        assert!(dates.is_valid);

        let report = detect_conflicts(
            std::slice::from_ref(&site),
            dates.interval(),
            std::slice::from_ref(&other),
            &[],
        );
        assert!(report.has_conflict(site.id));
        assert_eq!(report.conflicts[0].kind, ConflictKind::Reservation);

        let blocked = is_blocked(
            report.has_conflict(site.id),
            report.has_blackout(site.id),
            OverrideFlags::default(),
        );
        let ghost = build_ghost_state(
            DragMode::Move,
            site.id,
            dates.start,
            dates.end,
            blocked.then(|| conflict_message(&report.conflicts).unwrap()),
        );

        assert!(!ghost.is_valid);
        assert!(ghost.error_message.unwrap().contains("Jane Roe"));
    }

    #[test]
    fn test_resize_then_conflict_check_then_ghost() {
        // Stretching the right edge into free dates produces a valid ghost
        let site = campsite("S1");
        let month_start = date(2024, 1, 1);
        let month_end = date(2024, 2, 1);

        let dates = compute_resize_dates(
            date(2024, 1, 5),
            date(2024, 1, 8),
            ResizeEdge::Right,
            date(2024, 1, 9),
            month_start,
            month_end,
        );
        assert!(dates.is_valid);

        let report = detect_conflicts(std::slice::from_ref(&site), dates.interval(), &[], &[]);
        let blocked = is_blocked(
            report.has_conflict(site.id),
            report.has_blackout(site.id),
            OverrideFlags::default(),
        );

        let ghost = ghost_from_drag(DragMode::Resize, site.id, &dates);
        assert!(!blocked);
        assert!(ghost.is_valid);
        assert_eq!(ghost.interval, DateInterval::new(date(2024, 1, 5), date(2024, 1, 10)));
    }

    #[test]
    fn test_ghost_serializes_as_plain_data() {
        let ghost = build_ghost_state(
            DragMode::Move,
            Uuid::new_v4(),
            date(2024, 1, 5),
            date(2024, 1, 8),
            None,
        );

        let json = serde_json::to_value(&ghost).unwrap();
        assert_eq!(json["mode"], "move");
        assert_eq!(json["is_valid"], true);
    }
}
