//! Trading session and derived statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Bar;

/// The ordered bars of one calendar trading day.
///
/// Invariant: bar timestamps are strictly increasing and every bar's UTC date
/// equals `date`. The cleaning stage in dayview-session is the only
/// constructor that enforces this; `Session::new` trusts its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The calendar date all bars share.
    pub date: NaiveDate,
    /// The bars, oldest first.
    pub bars: Vec<Bar>,
}

impl Session {
    /// Creates a session from already-cleaned bars.
    #[must_use]
    pub const fn new(date: NaiveDate, bars: Vec<Bar>) -> Self {
        Self { date, bars }
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the session holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the derived statistics, or `None` for an empty session.
    #[must_use]
    pub fn stats(&self) -> Option<SessionStats> {
        SessionStats::from_session(self)
    }
}

/// Statistics derived from a non-empty session.
///
/// Stateless and recomputed per run; nothing here survives an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// The first bar's open.
    pub open: f64,
    /// The last bar's close.
    pub close: f64,
    /// The maximum of all highs.
    pub high: f64,
    /// The minimum of all lows.
    pub low: f64,
    /// The sum of all volumes.
    pub volume: f64,
    /// Close minus open.
    pub net_change: f64,
    /// Net change relative to the open, in percent.
    ///
    /// `None` when the session opened at zero; the division is guarded
    /// rather than allowed to produce an infinity.
    pub percent_change: Option<f64>,
}

impl SessionStats {
    /// Derives statistics from a session.
    ///
    /// Returns `None` for an empty session.
    #[must_use]
    pub fn from_session(session: &Session) -> Option<Self> {
        let first = session.bars.first()?;
        let last = session.bars.last()?;

        let high = session
            .bars
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let low = session
            .bars
            .iter()
            .map(|b| b.low)
            .fold(f64::INFINITY, f64::min);
        let volume: f64 = session.bars.iter().map(|b| b.volume).sum();

        let net_change = last.close - first.open;
        let percent_change = if first.open == 0.0 {
            None
        } else {
            Some(net_change / first.open * 100.0)
        };

        Some(Self {
            open: first.open,
            close: last.close,
            high,
            low,
            volume,
            net_change,
            percent_change,
        })
    }
}
