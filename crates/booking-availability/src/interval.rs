use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open calendar date range `[start, end)`.
///
/// `end` is exclusive: a stay from the 5th to the 8th occupies the nights of
/// the 5th, 6th, and 7th, and the site is free again on the 8th. Every
/// overlap comparison in the engine goes through this convention, which is
/// what makes back-to-back checkout/check-in on the same day legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    /// First occupied day (check-in)
    pub start: NaiveDate,
    /// First day after the stay (check-out, exclusive)
    pub end: NaiveDate,
}

impl DateInterval {
    /// Create an interval. Callers are expected to uphold `end > start`;
    /// the request validator rejects degenerate ranges before they reach
    /// any overlap test.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test: true when the two ranges share at least one
    /// night. Adjacent intervals (one ends the day the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Number of nights covered by the interval.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether a single day falls inside the interval (i.e. is an occupied
    /// night).
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.start && day < self.end
    }
}
