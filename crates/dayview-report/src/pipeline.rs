//! The one-shot pipeline run.

use chrono::{DateTime, Utc};
use dayview_chart::{ChartOptions, render_candles, render_line};
use dayview_fetch::BarSource;
use dayview_session::build_session;
use dayview_types::{DayviewError, TradingWindow};

use crate::report::{Outcome, Report, diagnostic_for, stats_rows};

/// Runs the dashboard pipeline for the day before `now`.
///
/// The clock comes in as a parameter; nothing below this call reads system
/// time, which is what makes the window selection testable.
pub async fn run_report(
    source: &dyn BarSource,
    symbol: &str,
    now: DateTime<Utc>,
    options: &ChartOptions,
) -> Report {
    let window = TradingWindow::previous_day(now);
    run_report_for_window(source, symbol, window, options).await
}

/// Runs the dashboard pipeline for an explicit window.
///
/// One fetch, one clean pass, one render pass. Every error is converted to a
/// diagnostic on the returned [`Report`]; this function never fails and never
/// retries.
pub async fn run_report_for_window(
    source: &dyn BarSource,
    symbol: &str,
    window: TradingWindow,
    options: &ChartOptions,
) -> Report {
    tracing::info!(symbol, %window, "starting dashboard run");

    let rows = match source.minute_bars(symbol, &window).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(symbol, error = %err, "fetch failed");
            return Report {
                outcome: Outcome::FetchFailed,
                chart: None,
                stats: Vec::new(),
                diagnostic: Some(diagnostic_for(&err)),
            };
        }
    };

    let session = match build_session(symbol, &window, &rows) {
        Ok(session) => session,
        Err(err) => {
            tracing::info!(symbol, error = %err, "no usable session");
            return Report {
                outcome: Outcome::EmptyReported,
                chart: None,
                stats: Vec::new(),
                diagnostic: Some(diagnostic_for(&err)),
            };
        }
    };

    // The session is non-empty past this point, so stats always exist.
    let stats = session
        .stats()
        .map(|s| stats_rows(&s))
        .unwrap_or_default();

    let title = format!("{symbol} {}", session.date);
    let options = options.clone().titled(title);

    let (outcome, chart, diagnostic) = render_with_fallback(&session, &options);
    Report {
        outcome,
        chart,
        stats,
        diagnostic,
    }
}

/// The render step: candles first, the line chart when candles refuse.
///
/// A fallback is never silent; its diagnostic names the candle failure so
/// degraded output stays distinguishable from a full render. When both
/// renderers refuse, the caller still shows statistics.
fn render_with_fallback(
    session: &dayview_types::Session,
    options: &ChartOptions,
) -> (Outcome, Option<dayview_chart::Chart>, Option<String>) {
    match render_candles(session, options) {
        Ok(chart) => (Outcome::Rendered, Some(chart), None),
        Err(candle_err) => {
            tracing::warn!(error = %candle_err, "candle render failed, trying fallback");
            match render_line(session, options) {
                Ok(chart) => (
                    Outcome::RenderedFallback,
                    Some(chart),
                    Some(format!(
                        "Candlestick rendering failed ({candle_err}); showing simplified line chart."
                    )),
                ),
                Err(line_err) => (
                    Outcome::RenderFailed,
                    None,
                    Some(diagnostic_for(&DayviewError::Render(line_err))),
                ),
            }
        }
    }
}
