//! Day filtering and row cleaning.

use chrono::NaiveDate;
use dayview_types::{Bar, RawRow};

/// Keeps exactly the rows whose UTC calendar date equals `date`.
///
/// The provider's window can include adjacent-day rows due to timezone skew;
/// a bar stamped exactly midnight belongs to the new day and is excluded.
#[must_use]
pub fn filter_to_date(rows: &[RawRow], date: NaiveDate) -> Vec<RawRow> {
    rows.iter()
        .copied()
        .filter(|row| row.timestamp.date_naive() == date)
        .collect()
}

/// Converts raw rows into valid bars.
///
/// A row survives only if all four prices are present, finite, and
/// non-negative. Missing volume becomes zero: price validity is the gate,
/// volume gaps are recorded, not fatal. Rows that fail to strictly advance
/// the timestamp are dropped so the session invariant (strictly increasing,
/// unique timestamps) holds by construction.
#[must_use]
pub fn clean_rows(rows: &[RawRow]) -> Vec<Bar> {
    let mut bars: Vec<Bar> = Vec::with_capacity(rows.len());

    for row in rows {
        let (Some(open), Some(high), Some(low), Some(close)) =
            (row.open, row.high, row.low, row.close)
        else {
            continue;
        };

        let bar = Bar::new(
            row.timestamp,
            open,
            high,
            low,
            close,
            row.volume.unwrap_or(0.0),
        );
        if !bar.is_price_valid() {
            continue;
        }

        if let Some(last) = bars.last()
            && bar.timestamp <= last.timestamp
        {
            continue;
        }
        bars.push(bar);
    }

    let dropped = rows.len() - bars.len();
    if dropped > 0 {
        tracing::debug!(total = rows.len(), dropped, "dropped invalid rows");
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};

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
    fn test_filter_retains_only_target_date() {
        let date = Utc
            .with_ymd_and_hms(2026, 8, 28, 0, 0, 0)
            .unwrap()
            .date_naive();
        // 23:58, 23:59, then midnight and 00:01 of the next day.
        let rows = vec![row(628, Some(500.1)), row(629, Some(500.2)),
                        row(630, Some(500.3)), row(631, Some(500.4))];

        let kept = filter_to_date(&rows, date);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.timestamp.date_naive() == date));
    }

    #[test]
    fn test_filter_midnight_boundary_excluded() {
        let date = Utc
            .with_ymd_and_hms(2026, 8, 28, 0, 0, 0)
            .unwrap()
            .date_naive();
        let midnight = RawRow::new(
            Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap(),
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(1.0),
        );

        assert!(filter_to_date(&[midnight], date).is_empty());
    }

    #[test]
    fn test_clean_drops_missing_close() {
        let rows = vec![row(0, Some(500.2)), row(1, None), row(2, Some(500.4))];
        let bars = clean_rows(&rows);

        assert_eq!(bars.len(), 2);
        assert_eq!(rows.len() - bars.len(), 1);
    }

    #[test]
    fn test_clean_drops_nan_price() {
        let rows = vec![row(0, Some(f64::NAN)), row(1, Some(500.4))];
        let bars = clean_rows(&rows);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 500.4);
    }

    #[test]
    fn test_clean_missing_volume_becomes_zero() {
        let mut r = row(0, Some(500.2));
        r.volume = None;

        let bars = clean_rows(&[r]);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].volume, 0.0);
    }

    #[test]
    fn test_clean_drops_duplicate_timestamps() {
        let rows = vec![row(0, Some(500.2)), row(0, Some(500.3)), row(1, Some(500.4))];
        let bars = clean_rows(&rows);

        assert_eq!(bars.len(), 2);
        assert!(bars[0].timestamp < bars[1].timestamp);
    }

    #[test]
    fn test_clean_count_decreases_by_invalid_rows() {
        // 5 corrupted rows out of 390: the cleaned set has exactly 385.
        let rows: Vec<RawRow> = (0..390)
            .map(|i| {
                if i % 78 == 5 {
                    row(i, None)
                } else {
                    row(i, Some(500.0))
                }
            })
            .collect();

        let corrupted = rows.iter().filter(|r| r.close.is_none()).count();
        assert_eq!(corrupted, 5);
        assert_eq!(clean_rows(&rows).len(), 385);
    }
}
