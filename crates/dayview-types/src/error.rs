//! Error taxonomy for dayview.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for dayview operations.
pub type Result<T> = std::result::Result<T, DayviewError>;

/// Errors that can occur while building a session dashboard.
///
/// The three `Empty*` variants are deliberately distinct: each one names the
/// pipeline stage that produced zero rows, so a user can tell a closed market
/// apart from a timezone misalignment or a data-quality wipeout.
#[derive(Error, Debug)]
pub enum DayviewError {
    /// Network or provider failure, including timeouts.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The provider returned zero rows for the requested window.
    #[error("No data for {symbol} in {window} (market likely closed)")]
    EmptyWindow {
        /// The requested symbol.
        symbol: String,
        /// The requested window, formatted as "start to end".
        window: String,
    },

    /// Rows existed but none matched the target calendar date.
    #[error("No rows for {symbol} fall on {date} (window/timezone misalignment)")]
    EmptyAfterFilter {
        /// The requested symbol.
        symbol: String,
        /// The target session date.
        date: NaiveDate,
    },

    /// Rows matched the date but cleaning dropped every one of them.
    #[error("All {fetched} rows for {symbol} on {date} were invalid")]
    EmptyAfterClean {
        /// The requested symbol.
        symbol: String,
        /// The target session date.
        date: NaiveDate,
        /// How many rows reached the cleaning stage.
        fetched: usize,
    },

    /// The chart renderer rejected the session's shape.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Invalid trading window.
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Error for invalid trading windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Start date is not before the end date.
    #[error("Invalid window: {start} >= {end}")]
    InvalidWindow {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Errors from chart rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The session has no bars to draw.
    #[error("Cannot render a chart from zero bars")]
    NoBars,

    /// Bar timestamps are not strictly increasing.
    #[error("Bar timestamps are not strictly increasing (index {index})")]
    NonMonotonic {
        /// Index of the first bar that does not advance the timestamp.
        index: usize,
    },

    /// The requested chart area is too small to draw into.
    #[error("Chart area {width}x{height} is too small")]
    TooNarrow {
        /// Requested width in columns.
        width: u16,
        /// Requested height in rows.
        height: u16,
    },
}
