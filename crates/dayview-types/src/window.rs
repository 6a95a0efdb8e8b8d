//! Previous-day trading window.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::WindowError;

/// The date window for one dashboard run.
///
/// `start` is the target session date (inclusive); `end` is the exclusive
/// fetch bound. The provider is queried for `[start, end)` and the result is
/// then filtered down to bars whose UTC date equals `start`, because
/// provider-side timezone skew can leak adjacent-day rows into the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TradingWindow {
    /// Creates a new window, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start >= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the window for the day before the given instant (UTC).
    ///
    /// The clock is an explicit parameter so callers can pin it in tests;
    /// nothing in this type reads the system time.
    #[must_use]
    pub fn previous_day(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        Self {
            start: today - TimeDelta::days(1),
            end: today,
        }
    }

    /// Returns the target session date.
    #[must_use]
    pub const fn target_date(&self) -> NaiveDate {
        self.start
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the timestamp falls on the target date (UTC).
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp.date_naive() == self.start
    }
}

impl std::fmt::Display for TradingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
