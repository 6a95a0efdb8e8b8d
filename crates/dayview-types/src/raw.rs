//! Provider rows before cleaning.

use chrono::{DateTime, Utc};

/// One provider row as fetched, before coercion and validation.
///
/// The provider reports every field as nullable; a field that did not
/// materialize as a number arrives here as `None`. The cleaning stage decides
/// what to do with the gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRow {
    /// Row timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price, if present.
    pub open: Option<f64>,
    /// High price, if present.
    pub high: Option<f64>,
    /// Low price, if present.
    pub low: Option<f64>,
    /// Closing price, if present.
    pub close: Option<f64>,
    /// Volume, if present.
    pub volume: Option<f64>,
}

impl RawRow {
    /// Creates a new raw row.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if all four price fields are present.
    #[must_use]
    pub const fn has_prices(&self) -> bool {
        self.open.is_some() && self.high.is_some() && self.low.is_some() && self.close.is_some()
    }
}
