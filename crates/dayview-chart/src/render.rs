//! Off-screen rendering entry points.

use dayview_types::{RenderError, Session};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use crate::bucket::bucket_bars;
use crate::options::ChartOptions;
use crate::panel::{CandlePanel, LinePanel};

/// Columns consumed by the border and the Y-axis label margin.
const CHROME_WIDTH: u16 = 10;

/// A rendered chart: plain text rows, ready for a terminal or a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    lines: Vec<String>,
}

impl Chart {
    /// Returns the rendered rows, top first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the chart, yielding its rows.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders a session as a candlestick chart.
///
/// Bars are compressed to one column each when the session is wider than the
/// plot area; SMA overlays and the volume sub-panel follow
/// [`ChartOptions`].
///
/// # Errors
///
/// - [`RenderError::NoBars`] for an empty session
/// - [`RenderError::NonMonotonic`] when timestamps do not strictly increase
/// - [`RenderError::TooNarrow`] when the requested area cannot hold a chart
pub fn render_candles(session: &Session, options: &ChartOptions) -> Result<Chart, RenderError> {
    validate(session, options)?;

    let columns = usize::from(options.width.saturating_sub(CHROME_WIDTH));
    let bars = bucket_bars(&session.bars, columns);
    tracing::debug!(
        bars = session.bars.len(),
        columns = bars.len(),
        "rendering candle chart"
    );

    let panel = CandlePanel::new(
        &bars,
        &options.moving_averages,
        options.show_volume,
        &options.title,
    );
    Ok(draw(panel, options))
}

/// Renders the fallback chart: a close-price line plus volume columns.
///
/// Deliberately tolerant: the only shape requirements are at least one bar
/// and a drawable area, so a session the candle renderer rejected still
/// produces something to look at.
///
/// # Errors
///
/// - [`RenderError::NoBars`] for an empty session
/// - [`RenderError::TooNarrow`] when the requested area cannot hold a chart
pub fn render_line(session: &Session, options: &ChartOptions) -> Result<Chart, RenderError> {
    if session.is_empty() {
        return Err(RenderError::NoBars);
    }
    check_area(options)?;

    let columns = usize::from(options.width.saturating_sub(CHROME_WIDTH));
    let bars = bucket_bars(&session.bars, columns);

    let panel = LinePanel::new(&bars, options.show_volume, &options.title);
    Ok(draw(panel, options))
}

/// Full input validation for the candle renderer.
fn validate(session: &Session, options: &ChartOptions) -> Result<(), RenderError> {
    if session.is_empty() {
        return Err(RenderError::NoBars);
    }
    for (index, pair) in session.bars.windows(2).enumerate() {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(RenderError::NonMonotonic { index: index + 1 });
        }
    }
    check_area(options)
}

fn check_area(options: &ChartOptions) -> Result<(), RenderError> {
    if options.width <= CHROME_WIDTH + 4 || options.height < 6 {
        return Err(RenderError::TooNarrow {
            width: options.width,
            height: options.height,
        });
    }
    Ok(())
}

/// Renders a widget into an off-screen buffer and extracts its rows.
fn draw(widget: impl Widget, options: &ChartOptions) -> Chart {
    let area = Rect::new(0, 0, options.width, options.height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    let lines = (0..options.height)
        .map(|y| {
            let mut line = String::with_capacity(usize::from(options.width));
            for x in 0..options.width {
                match buf.cell(Position::new(x, y)) {
                    Some(cell) => line.push_str(cell.symbol()),
                    None => line.push(' '),
                }
            }
            line.trim_end().to_string()
        })
        .collect();

    Chart { lines }
}
