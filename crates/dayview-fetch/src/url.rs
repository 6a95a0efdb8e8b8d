//! Chart API URL construction.

use dayview_types::TradingWindow;

/// Base URL for the provider's chart endpoint.
const CHART_BASE: &str = "https://query2.finance.yahoo.com/v8/finance/chart";

/// Builds the chart API URL for a symbol and window at 1-minute resolution.
///
/// The window's start and end dates become UTC midnight unix bounds, so the
/// request covers `[start, end)`. The provider interprets the bounds in its
/// own exchange timezone, which is why adjacent-day rows can still appear in
/// the response and must be filtered out downstream.
#[must_use]
pub fn chart_url(symbol: &str, window: &TradingWindow) -> String {
    let period1 = window
        .start()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
        .timestamp();
    let period2 = window
        .end()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
        .timestamp();

    format!("{CHART_BASE}/{symbol}?period1={period1}&period2={period2}&interval=1m")
}
