//! Report shape and formatting.

use dayview_chart::Chart;
use dayview_types::{DayviewError, SessionStats};

/// The terminal state a run reached.
///
/// One run walks `START -> FETCHING -> CLEANING -> RENDERING` and ends in
/// exactly one of these; there is no retry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Candlestick chart rendered.
    Rendered,
    /// The fallback line chart rendered after the candle renderer refused.
    RenderedFallback,
    /// Both renderers refused; statistics are still shown.
    RenderFailed,
    /// A cleaning stage left zero rows; reported, not fatal.
    EmptyReported,
    /// The fetch itself failed.
    FetchFailed,
}

/// What one run hands to the embedding surface.
#[derive(Debug)]
pub struct Report {
    /// How the run ended.
    pub outcome: Outcome,
    /// The rendered chart, if any renderer succeeded.
    pub chart: Option<Chart>,
    /// Label/value stat pairs, empty when no session was built.
    pub stats: Vec<(String, String)>,
    /// Human-readable diagnostic; present for every outcome except a clean
    /// [`Outcome::Rendered`], so degraded output is never mistaken for a
    /// fully successful render.
    pub diagnostic: Option<String>,
}

impl Report {
    /// Returns true if a fallback or failure degraded the output.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.outcome, Outcome::Rendered)
    }
}

/// Formats session statistics as ordered label/value pairs.
///
/// The order mirrors the dashboard layout: prices first, then volume, then
/// the change pair. An undefined percent change (zero open) renders as "n/a"
/// instead of being dropped.
#[must_use]
pub fn stats_rows(stats: &SessionStats) -> Vec<(String, String)> {
    let percent = stats
        .percent_change
        .map_or_else(|| "n/a".to_string(), |p| format!("{p:+.2}%"));

    vec![
        ("Open".to_string(), format!("${:.2}", stats.open)),
        ("Close".to_string(), format!("${:.2}", stats.close)),
        ("High".to_string(), format!("${:.2}", stats.high)),
        ("Low".to_string(), format!("${:.2}", stats.low)),
        ("Volume".to_string(), format_volume(stats.volume)),
        ("Change".to_string(), format!("{:+.2}", stats.net_change)),
        ("Change %".to_string(), percent),
    ]
}

/// Converts an error into the user-visible diagnostic for that run.
///
/// Each variant gets its own guidance so the user can tell which stage
/// produced nothing.
#[must_use]
pub fn diagnostic_for(error: &DayviewError) -> String {
    match error {
        DayviewError::Fetch(_) => {
            format!("{error}. The data provider may be unavailable; try again later.")
        }
        DayviewError::EmptyWindow { .. } => {
            format!("{error}. Markets are closed on weekends and holidays; try again on a trading day.")
        }
        DayviewError::EmptyAfterFilter { .. } => {
            format!("{error}. The provider answered, but with rows from adjacent days only.")
        }
        DayviewError::EmptyAfterClean { .. } => {
            format!("{error}. The provider's data for this day is unusable.")
        }
        DayviewError::Render(_) => {
            format!("Chart rendering failed: {error}. Statistics are shown without a chart.")
        }
        DayviewError::Window(_) => format!("{error}."),
    }
}

/// Formats a share volume compactly (e.g. "57.3M").
fn format_volume(volume: f64) -> String {
    if volume >= 1e9 {
        format!("{:.1}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("{:.1}M", volume / 1e6)
    } else if volume >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{volume:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SessionStats {
        SessionStats {
            open: 500.00,
            close: 502.50,
            high: 503.10,
            low: 499.20,
            volume: 57_340_000.0,
            net_change: 2.50,
            percent_change: Some(0.50),
        }
    }

    #[test]
    fn test_stats_rows_order_and_format() {
        let rows = stats_rows(&stats());
        let labels: Vec<&str> = rows.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            ["Open", "Close", "High", "Low", "Volume", "Change", "Change %"]
        );

        assert_eq!(rows[0].1, "$500.00");
        assert_eq!(rows[4].1, "57.3M");
        assert_eq!(rows[5].1, "+2.50");
        assert_eq!(rows[6].1, "+0.50%");
    }

    #[test]
    fn test_undefined_percent_renders_as_na() {
        let mut s = stats();
        s.percent_change = None;
        let rows = stats_rows(&s);
        assert_eq!(rows[6].1, "n/a");
    }

    #[test]
    fn test_negative_change_keeps_sign() {
        let mut s = stats();
        s.net_change = -1.25;
        s.percent_change = Some(-0.25);
        let rows = stats_rows(&s);
        assert_eq!(rows[5].1, "-1.25");
        assert_eq!(rows[6].1, "-0.25%");
    }

    #[test]
    fn test_format_volume_scales() {
        assert_eq!(format_volume(950.0), "950");
        assert_eq!(format_volume(12_500.0), "12.5K");
        assert_eq!(format_volume(57_340_000.0), "57.3M");
        assert_eq!(format_volume(2_100_000_000.0), "2.1B");
    }

    #[test]
    fn test_diagnostics_identify_the_stage() {
        let fetch = diagnostic_for(&DayviewError::Fetch("SPY: request timed out".into()));
        assert!(fetch.contains("try again later"));

        let empty = diagnostic_for(&DayviewError::EmptyWindow {
            symbol: "SPY".into(),
            window: "2026-08-29 to 2026-08-30".into(),
        });
        assert!(empty.contains("closed on weekends"));
    }
}
