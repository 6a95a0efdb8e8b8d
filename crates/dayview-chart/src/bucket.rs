//! Bar compression for narrow plots.

use dayview_types::Bar;

/// Compresses bars so at most `max_columns` remain, one column per bucket.
///
/// A full session is 390 one-minute bars, far more than a terminal is wide.
/// Consecutive bars are merged the way coarser timeframes are built: open of
/// the first, high of the highs, low of the lows, close of the last, summed
/// volume, first timestamp. With enough room the input comes back unchanged.
#[must_use]
pub fn bucket_bars(bars: &[Bar], max_columns: usize) -> Vec<Bar> {
    if max_columns == 0 || bars.len() <= max_columns {
        return bars.to_vec();
    }

    let bucket_size = bars.len().div_ceil(max_columns);
    bars.chunks(bucket_size)
        .map(|chunk| {
            let first = chunk[0];
            let last = chunk[chunk.len() - 1];
            Bar::new(
                first.timestamp,
                first.open,
                chunk.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max),
                chunk.iter().map(|b| b.low).fold(f64::INFINITY, f64::min),
                last.close,
                chunk.iter().map(|b| b.volume).sum(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};

    fn bars(n: i64) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2026, 8, 28, 13, 30, 0).unwrap();
        (0..n)
            .map(|i| {
                let p = 500.0 + i as f64;
                Bar::new(
                    start + TimeDelta::minutes(i),
                    p,
                    p + 0.5,
                    p - 0.5,
                    p + 0.2,
                    100.0,
                )
            })
            .collect()
    }

    #[test]
    fn test_no_compression_when_it_fits() {
        let input = bars(50);
        assert_eq!(bucket_bars(&input, 70), input);
    }

    #[test]
    fn test_compression_preserves_endpoints_and_extremes() {
        let input = bars(390);
        let out = bucket_bars(&input, 70);

        assert!(out.len() <= 70);
        assert_eq!(out[0].open, input[0].open);
        assert_eq!(out.last().unwrap().close, input.last().unwrap().close);

        let max_high = input.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let out_max = out.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max_high, out_max);
    }

    #[test]
    fn test_compression_preserves_total_volume() {
        let input = bars(390);
        let out = bucket_bars(&input, 70);

        let total: f64 = input.iter().map(|b| b.volume).sum();
        let compressed: f64 = out.iter().map(|b| b.volume).sum();
        assert!((total - compressed).abs() < 1e-9);
    }

    #[test]
    fn test_timestamps_stay_strictly_increasing() {
        let out = bucket_bars(&bars(390), 70);
        assert!(out.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }
}
