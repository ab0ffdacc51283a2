use booking_availability::DateInterval;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validity reason when a candidate interval leaves the rendered month
pub const OUT_OF_MONTH_RANGE: &str = "Out of month range";
/// Validity reason when a resize would shrink a stay below one night
pub const MIN_ONE_NIGHT: &str = "Minimum stay is 1 night";

/// The calendar item under the pointer: an already-loaded reservation bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalendarItem {
    /// Campsite row the bar is rendered on
    pub campsite_id: Uuid,
    /// The item's committed stay
    pub interval: DateInterval,
}

/// Which edge of the bar is being resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    /// The check-in edge
    Left,
    /// The check-out edge
    Right,
}

/// Candidate dates for an in-flight drag or resize.
///
/// The computed dates are returned even when invalid, so the UI can render
/// the rejected ghost position along with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDates {
    /// Candidate check-in
    pub start: NaiveDate,
    /// Candidate check-out (exclusive)
    pub end: NaiveDate,
    /// Whether the candidate can be committed
    pub is_valid: bool,
    /// Reason when invalid
    pub error: Option<String>,
}

impl DragDates {
    fn valid(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            is_valid: true,
            error: None,
        }
    }

    fn invalid(start: NaiveDate, end: NaiveDate, reason: &str) -> Self {
        Self {
            start,
            end,
            is_valid: false,
            error: Some(reason.to_string()),
        }
    }

    /// The candidate as a half-open interval.
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.start, self.end)
    }
}

// View bounds are half-open over days: a candidate fits the rendered month
// iff start >= month_start && end <= month_end, with month_end the first
// day after the view.
fn in_month_bounds(
    start: NaiveDate,
    end: NaiveDate,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> bool {
    start >= month_start && end <= month_end
}

/// Compute candidate dates for moving a whole bar.
///
/// Move semantics: the night count is invariant. `offset_days` is the
/// distance from the bar's start to the originally grabbed day, captured
/// once at drag start, so the bar does not snap its start to the cursor.
pub fn compute_drag_dates(
    item: &CalendarItem,
    offset_days: i64,
    cursor_date: NaiveDate,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> DragDates {
    let nights = item.interval.nights();
    let start = cursor_date - Duration::days(offset_days);
    let end = start + Duration::days(nights);

    if !in_month_bounds(start, end, month_start, month_end) {
        return DragDates::invalid(start, end, OUT_OF_MONTH_RANGE);
    }

    DragDates::valid(start, end)
}

/// Compute candidate dates for resizing one edge of a bar.
///
/// Only the grabbed edge moves. Hovering a day on the right edge means that
/// day becomes the last occupied night, so the exclusive end lands one day
/// after it. A resize that would cross the fixed edge (fewer than one
/// night) is invalid rather than clamped.
pub fn compute_resize_dates(
    original_start: NaiveDate,
    original_end: NaiveDate,
    edge: ResizeEdge,
    hover_date: NaiveDate,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> DragDates {
    let (start, end) = match edge {
        ResizeEdge::Right => (original_start, hover_date + Duration::days(1)),
        ResizeEdge::Left => (hover_date, original_end),
    };

    if end <= start {
        return DragDates::invalid(start, end, MIN_ONE_NIGHT);
    }
    if !in_month_bounds(start, end, month_start, month_end) {
        return DragDates::invalid(start, end, OUT_OF_MONTH_RANGE);
    }

    DragDates::valid(start, end)
}
