//! Simple moving average.

/// Rolling mean over a lookback window.
///
/// The first `period - 1` entries are NaN (warm-up); a NaN anywhere in the
/// current window makes that output NaN rather than a silently shortened
/// mean.
#[must_use]
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = window.iter().sum::<f64>() / period as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_warm_up_is_nan() {
        let out = sma(&[1.0, 2.0, 3.0, 4.0], 3);
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_relative_eq!(out[2], 2.0);
        assert_relative_eq!(out[3], 3.0);
    }

    #[test]
    fn test_sma_shorter_than_period() {
        let out = sma(&[1.0, 2.0], 5);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let out = sma(&[1.5, 2.5], 1);
        assert_relative_eq!(out[0], 1.5);
        assert_relative_eq!(out[1], 2.5);
    }

    #[test]
    fn test_sma_nan_poisons_window() {
        let out = sma(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2);
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
        assert_relative_eq!(out[3], 3.5);
    }
}
