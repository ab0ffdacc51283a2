use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::DateInterval;

/// Shortest bookable stay, in nights
pub const MIN_STAY_NIGHTS: i64 = 1;
/// Longest bookable stay, in nights
pub const MAX_STAY_NIGHTS: i64 = 21;

/// A bookable campsite as read from the campsite table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campsite {
    /// Unique identifier for the campsite
    pub id: Uuid,
    /// Display name (e.g. "Riverside 12")
    pub name: String,
    /// Maximum number of guests the site can hold
    pub max_guests: i32,
    /// Admin-controlled display/recommendation order
    pub sort_order: i32,
    /// Inactive sites never participate in availability
    pub is_active: bool,
}

/// Lifecycle status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting confirmation; still holds the site
    Pending,
    /// Confirmed booking
    Confirmed,
    /// Cancelled; releases the site
    Cancelled,
    /// Guest has arrived
    CheckedIn,
    /// Guest has departed; releases the site
    CheckedOut,
    /// Guest never arrived; releases the site
    NoShow,
}

impl ReservationStatus {
    /// Whether this status counts toward blocking a site. Only pending,
    /// confirmed, and checked-in reservations occupy their date range.
    pub fn is_occupying(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Pending | ReservationStatus::Confirmed | ReservationStatus::CheckedIn
        )
    }
}

/// A reservation row snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation
    pub id: Uuid,
    /// Assigned campsite; unassigned reservations block no specific site
    pub campsite_id: Option<Uuid>,
    /// Primary guest name, for conflict detail strings
    pub guest_name: String,
    /// Occupied date range, check-out exclusive
    pub interval: DateInterval,
    /// Current lifecycle status
    pub status: ReservationStatus,
}

/// An admin-defined blackout period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackoutDate {
    /// Unique identifier for the blackout
    pub id: Uuid,
    /// Affected campsite; `None` means the blackout is global and applies
    /// to every active campsite
    pub campsite_id: Option<Uuid>,
    /// Blacked-out date range, end exclusive
    pub interval: DateInterval,
    /// Optional human-readable reason (e.g. "Flood repair")
    pub reason: Option<String>,
}

/// Admin override flags, scoped per conflict type.
///
/// `force_conflict` never suppresses a blackout and `override_blackout`
/// never suppresses a reservation conflict. Both default to false; only
/// admin flows may set them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideFlags {
    /// Allow booking over an overlapping occupying reservation
    pub force_conflict: bool,
    /// Allow booking inside a blackout period
    pub override_blackout: bool,
}

/// A request to check whether a stay can be booked
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AvailabilityRequest {
    /// Check-in date (first occupied night)
    pub check_in: NaiveDate,
    /// Check-out date (exclusive)
    pub check_out: NaiveDate,
    /// Number of guests in the party
    #[validate(range(min = 1, message = "Guest count must be at least 1"))]
    pub guest_count: i32,
    /// Restrict the check to one specific campsite
    pub campsite_id: Option<Uuid>,
    /// Skip the past check-in rule (admin backfill flows)
    pub ignore_past_check: bool,
    /// Admin override flags; default false for guest-facing bookings
    pub overrides: OverrideFlags,
}

impl AvailabilityRequest {
    /// Build a request from ISO-8601 date strings as received at the HTTP
    /// boundary. Unparseable dates fail with
    /// [`ValidationError::InvalidDate`]; all other rules are checked later
    /// by [`validate_request`](crate::validate_request).
    pub fn from_iso(
        check_in: &str,
        check_out: &str,
        guest_count: i32,
        campsite_id: Option<Uuid>,
    ) -> Result<Self, ValidationError> {
        let check_in = check_in
            .parse::<NaiveDate>()
            .map_err(|_| ValidationError::InvalidDate(check_in.to_string()))?;
        let check_out = check_out
            .parse::<NaiveDate>()
            .map_err(|_| ValidationError::InvalidDate(check_out.to_string()))?;

        Ok(Self {
            check_in,
            check_out,
            guest_count,
            campsite_id,
            ignore_past_check: false,
            overrides: OverrideFlags::default(),
        })
    }

    /// The requested stay as a half-open interval.
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.check_in, self.check_out)
    }
}

/// What kind of row blocked a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// An overlapping occupying reservation
    Reservation,
    /// An overlapping blackout period
    Blackout,
}

/// One detected conflict, with enough detail for an admin UI to show why
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Id of the conflicting reservation or blackout row
    pub id: Uuid,
    /// Affected campsite; `None` for a global blackout
    pub campsite_id: Option<Uuid>,
    /// Reservation or blackout
    pub kind: ConflictKind,
    /// Human-readable description of the conflict
    pub detail: String,
}

/// Outcome of an availability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// Whether at least one site can take the stay
    pub available: bool,
    /// User-displayable reason when unavailable
    pub message: Option<String>,
    /// The recommended campsite when available
    pub recommended_site_id: Option<Uuid>,
    /// Every conflict detected on the candidate sites, blocked or not
    pub conflicts: Vec<Conflict>,
}

impl AvailabilityResult {
    /// An available result recommending the given site.
    pub fn available(site_id: Uuid, conflicts: Vec<Conflict>) -> Self {
        Self {
            available: true,
            message: None,
            recommended_site_id: Some(site_id),
            conflicts,
        }
    }

    /// An unavailable result with a reason and the raw conflict list.
    pub fn unavailable(message: impl Into<String>, conflicts: Vec<Conflict>) -> Self {
        Self {
            available: false,
            message: Some(message.into()),
            recommended_site_id: None,
            conflicts,
        }
    }
}

/// Caller-correctable validation failures. These are always surfaced as a
/// structured unavailable result with the variant's display message, never
/// as a raw error from the service.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string did not parse to a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Check-out on or before check-in
    #[error("Check-out date must be after check-in date")]
    CheckoutBeforeCheckin,

    /// Check-in earlier than yesterday
    #[error("Check-in date cannot be in the past")]
    PastCheckIn,

    /// Stay shorter than the minimum
    #[error("Stay must be at least {MIN_STAY_NIGHTS} night")]
    StayTooShort,

    /// Stay longer than the maximum
    #[error("Stay cannot exceed {MAX_STAY_NIGHTS} nights")]
    StayTooLong,

    /// Fewer than one guest
    #[error("Guest count must be at least 1")]
    InvalidGuestCount,
}
