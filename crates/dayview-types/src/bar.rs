//! Minute bar representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single 1-minute OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the minute.
    pub high: f64,
    /// Lowest price during the minute.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume. Zero when the provider reported none.
    pub volume: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
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

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns true if all four prices are finite and non-negative.
    ///
    /// Volume is deliberately not part of the gate: price validity decides
    /// whether a bar is usable, a missing volume is recorded as zero.
    #[must_use]
    pub fn is_price_valid(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_bar() -> Bar {
        let timestamp = Utc.with_ymd_and_hms(2026, 8, 28, 14, 30, 0).unwrap();
        Bar::new(timestamp, 500.00, 500.75, 499.80, 500.50, 120_000.0)
    }

    #[test]
    fn test_range() {
        let bar = create_test_bar();
        assert!((bar.range() - 0.95).abs() < 1e-10);
    }

    #[test]
    fn test_body() {
        let bar = create_test_bar();
        assert!((bar.body() - 0.50).abs() < 1e-10);
    }

    #[test]
    fn test_bullish() {
        let bar = create_test_bar();
        assert!(bar.is_bullish());
        assert!(!bar.is_bearish());
    }

    #[test]
    fn test_bearish() {
        let timestamp = Utc.with_ymd_and_hms(2026, 8, 28, 14, 30, 0).unwrap();
        let bar = Bar::new(timestamp, 500.50, 500.75, 499.80, 500.00, 120_000.0);
        assert!(!bar.is_bullish());
        assert!(bar.is_bearish());
    }

    #[test]
    fn test_price_valid() {
        let bar = create_test_bar();
        assert!(bar.is_price_valid());
    }

    #[test]
    fn test_price_invalid_nan() {
        let mut bar = create_test_bar();
        bar.close = f64::NAN;
        assert!(!bar.is_price_valid());
    }

    #[test]
    fn test_price_invalid_negative() {
        let mut bar = create_test_bar();
        bar.low = -0.01;
        assert!(!bar.is_price_valid());
    }
}
