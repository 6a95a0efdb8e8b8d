//! Chart API response parsing.
//!
//! The provider's chart endpoint returns columnar JSON: one array of unix
//! timestamps plus parallel arrays of nullable OHLCV values. Every field is
//! nullable in practice, so this module maps straight onto [`RawRow`] and
//! leaves gap handling to the cleaning stage.

use chrono::DateTime;
use dayview_types::{DayviewError, RawRow, Result};
use serde::Deserialize;

/// Chart API response envelope.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

/// Converts a chart response into raw rows.
///
/// An absent timestamp array means the provider had nothing for the window
/// (weekend, holiday) and yields an empty vec, not an error. Structural
/// problems (provider-side error object, missing quote block, array length
/// skew) are fetch errors with messages precise enough to diagnose a format
/// change.
///
/// # Errors
///
/// Returns [`DayviewError::Fetch`] on any structural mismatch.
pub fn parse_rows(symbol: &str, response: ChartResponse) -> Result<Vec<RawRow>> {
    let result = response.chart.result.ok_or_else(|| {
        response.chart.error.map_or_else(
            || DayviewError::Fetch(format!("{symbol}: empty result with no error")),
            |err| DayviewError::Fetch(format!("{symbol}: {}: {}", err.code, err.description)),
        )
    })?;

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| DayviewError::Fetch(format!("{symbol}: result array is empty")))?;

    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| DayviewError::Fetch(format!("{symbol}: no quote data")))?;

    let n = timestamps.len();
    for (name, len) in [
        ("open", quote.open.len()),
        ("high", quote.high.len()),
        ("low", quote.low.len()),
        ("close", quote.close.len()),
        ("volume", quote.volume.len()),
    ] {
        if len != n {
            return Err(DayviewError::Fetch(format!(
                "{symbol}: {name} array has {len} entries for {n} timestamps"
            )));
        }
    }

    let mut rows = Vec::with_capacity(n);
    for (i, &ts) in timestamps.iter().enumerate() {
        let timestamp = DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| DayviewError::Fetch(format!("{symbol}: invalid timestamp {ts}")))?;
        rows.push(RawRow::new(
            timestamp,
            quote.open[i],
            quote.high[i],
            quote.low[i],
            quote.close[i],
            quote.volume[i],
        ));
    }

    tracing::debug!(symbol, rows = rows.len(), "parsed chart response");
    Ok(rows)
}
