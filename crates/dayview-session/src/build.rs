//! Staged session construction.

use dayview_types::{DayviewError, RawRow, Result, Session, TradingWindow};

use crate::clean::{clean_rows, filter_to_date};

/// Builds a cleaned session from fetched rows.
///
/// Three stages, each with its own distinguishable empty outcome:
///
/// 1. raw rows empty → [`DayviewError::EmptyWindow`] (market likely closed)
/// 2. nothing on the target date → [`DayviewError::EmptyAfterFilter`]
/// 3. cleaning dropped everything → [`DayviewError::EmptyAfterClean`]
///
/// # Errors
///
/// Returns the empty-stage error described above; never fails for any other
/// reason.
pub fn build_session(symbol: &str, window: &TradingWindow, rows: &[RawRow]) -> Result<Session> {
    let date = window.target_date();

    if rows.is_empty() {
        return Err(DayviewError::EmptyWindow {
            symbol: symbol.to_string(),
            window: window.to_string(),
        });
    }

    let on_date = filter_to_date(rows, date);
    tracing::debug!(
        symbol,
        fetched = rows.len(),
        on_date = on_date.len(),
        %date,
        "filtered to target date"
    );
    if on_date.is_empty() {
        return Err(DayviewError::EmptyAfterFilter {
            symbol: symbol.to_string(),
            date,
        });
    }

    let bars = clean_rows(&on_date);
    if bars.is_empty() {
        return Err(DayviewError::EmptyAfterClean {
            symbol: symbol.to_string(),
            date,
            fetched: on_date.len(),
        });
    }

    Ok(Session::new(date, bars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};

    fn window() -> TradingWindow {
        TradingWindow::new(
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
        )
        .unwrap()
    }

    fn row(minute: i64, close: Option<f64>) -> RawRow {
        let start = Utc.with_ymd_and_hms(2026, 8, 28, 13, 30, 0).unwrap();
        RawRow::new(
            start + TimeDelta::minutes(minute),
            Some(500.0),
            Some(500.5),
            Some(499.5),
            close,
            Some(1_000.0),
        )
    }

    #[test]
    fn test_empty_fetch_reports_empty_window() {
        let err = build_session("SPY", &window(), &[]).unwrap_err();
        assert!(matches!(err, DayviewError::EmptyWindow { .. }));
    }

    #[test]
    fn test_wrong_day_reports_empty_after_filter() {
        // All rows land on the 29th, none on the target 28th.
        let rows: Vec<RawRow> = (0..5).map(|i| row(630 + i, Some(500.0))).collect();
        let err = build_session("SPY", &window(), &rows).unwrap_err();
        assert!(matches!(err, DayviewError::EmptyAfterFilter { .. }));
    }

    #[test]
    fn test_all_invalid_reports_empty_after_clean() {
        let rows: Vec<RawRow> = (0..5).map(|i| row(i, None)).collect();
        let err = build_session("SPY", &window(), &rows).unwrap_err();
        assert!(matches!(
            err,
            DayviewError::EmptyAfterClean { fetched: 5, .. }
        ));
    }

    #[test]
    fn test_valid_rows_build_a_session() {
        let rows: Vec<RawRow> = (0..390).map(|i| row(i, Some(500.0))).collect();
        let session = build_session("SPY", &window(), &rows).unwrap();

        assert_eq!(session.len(), 390);
        assert_eq!(session.date, window().target_date());
    }
}
