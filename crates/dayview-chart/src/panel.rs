//! Candle and fallback line widgets.
//!
//! Both panels render with direct buffer writes: each bar is one terminal
//! column, the body is a block char (full block for up bars, medium shade for
//! down bars), wicks are vertical lines, and the optional volume sub-panel
//! draws scaled columns along the bottom.

use dayview_types::Bar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::sma::sma;

/// Width reserved for Y-axis price labels.
const LABEL_WIDTH: u16 = 8;

/// Glyphs used by the SMA overlays, one per configured window.
const MA_GLYPHS: [&str; 3] = ["·", "˙", "*"];

/// Candlestick panel with volume sub-panel and SMA overlays.
#[derive(Debug)]
pub(crate) struct CandlePanel<'a> {
    bars: &'a [Bar],
    moving_averages: &'a [usize],
    show_volume: bool,
    title: &'a str,
}

impl<'a> CandlePanel<'a> {
    pub(crate) const fn new(
        bars: &'a [Bar],
        moving_averages: &'a [usize],
        show_volume: bool,
        title: &'a str,
    ) -> Self {
        Self {
            bars,
            moving_averages,
            show_volume,
            title,
        }
    }
}

impl Widget for CandlePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = PanelLayout::compute(area, buf, self.title, self.show_volume) else {
            return;
        };

        let (y_lower, y_upper) = price_bounds(self.bars);
        layout.draw_axis_labels(buf, y_lower, y_upper);

        for (i, bar) in self.bars.iter().take(layout.columns()).enumerate() {
            let x = layout.plot_left + i as u16;
            let is_up = bar.close >= bar.open;
            let style = Style::default().fg(if is_up { Color::Green } else { Color::Red });

            let high_y = layout.price_to_y(bar.high, y_lower, y_upper);
            let low_y = layout.price_to_y(bar.low, y_lower, y_upper);
            let body_top = layout.price_to_y(bar.open.max(bar.close), y_lower, y_upper);
            let body_bot = layout.price_to_y(bar.open.min(bar.close), y_lower, y_upper);

            for y in high_y..body_top {
                buf.set_string(x, layout.price_top + y, "|", style);
            }
            let body_char = if is_up { "\u{2588}" } else { "\u{2593}" };
            for y in body_top..=body_bot {
                buf.set_string(x, layout.price_top + y, body_char, style);
            }
            for y in (body_bot + 1)..=low_y {
                buf.set_string(x, layout.price_top + y, "|", style);
            }
        }

        let closes: Vec<f64> = self.bars.iter().map(|b| b.close).collect();
        for (k, &period) in self.moving_averages.iter().enumerate() {
            let glyph = MA_GLYPHS[k % MA_GLYPHS.len()];
            let style = Style::default().fg(Color::Yellow);
            for (i, value) in sma(&closes, period).iter().take(layout.columns()).enumerate() {
                if value.is_nan() {
                    continue;
                }
                let y = layout.price_to_y(*value, y_lower, y_upper);
                buf.set_string(layout.plot_left + i as u16, layout.price_top + y, glyph, style);
            }
        }

        layout.draw_volume(buf, self.bars);
    }
}

/// Fallback panel: close-price line plus the volume sub-panel.
///
/// Accepts any session with at least one bar; used when the candle renderer
/// rejects the input shape.
#[derive(Debug)]
pub(crate) struct LinePanel<'a> {
    bars: &'a [Bar],
    show_volume: bool,
    title: &'a str,
}

impl<'a> LinePanel<'a> {
    pub(crate) const fn new(bars: &'a [Bar], show_volume: bool, title: &'a str) -> Self {
        Self {
            bars,
            show_volume,
            title,
        }
    }
}

impl Widget for LinePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = PanelLayout::compute(area, buf, self.title, self.show_volume) else {
            return;
        };

        let (y_lower, y_upper) = close_bounds(self.bars);
        layout.draw_axis_labels(buf, y_lower, y_upper);

        let style = Style::default().fg(Color::Cyan);
        let mut prev_y: Option<u16> = None;
        for (i, bar) in self.bars.iter().take(layout.columns()).enumerate() {
            let x = layout.plot_left + i as u16;
            let y = layout.price_to_y(bar.close, y_lower, y_upper);

            // Fill vertical gaps so steep moves read as a line, not dots.
            if let Some(prev) = prev_y {
                let (lo, hi) = if prev < y { (prev, y) } else { (y, prev) };
                for fill in (lo + 1)..hi {
                    buf.set_string(x, layout.price_top + fill, "|", style);
                }
            }
            buf.set_string(x, layout.price_top + y, "\u{2022}", style);
            prev_y = Some(y);
        }

        layout.draw_volume(buf, self.bars);
    }
}

/// Shared panel geometry: bordered block, price area, optional volume area.
struct PanelLayout {
    plot_left: u16,
    plot_width: u16,
    price_top: u16,
    price_height: u16,
    volume_top: u16,
    volume_height: u16,
    label_x: u16,
}

impl PanelLayout {
    /// Draws the block and computes the panel geometry.
    ///
    /// Returns `None` when the area is too small to draw anything useful;
    /// the renderer validates dimensions up front, so this only guards
    /// against degenerate buffers.
    fn compute(area: Rect, buf: &mut Buffer, title: &str, show_volume: bool) -> Option<Self> {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let plot_width = inner.width.checked_sub(LABEL_WIDTH)?;
        if plot_width == 0 || inner.height < 4 {
            return None;
        }

        let volume_height = if show_volume && inner.height >= 8 {
            (inner.height / 4).max(3)
        } else {
            0
        };
        let price_height = inner.height - volume_height;

        Some(Self {
            plot_left: inner.x + LABEL_WIDTH,
            plot_width,
            price_top: inner.y,
            price_height,
            volume_top: inner.y + price_height,
            volume_height,
            label_x: inner.x,
        })
    }

    /// Number of drawable bar columns.
    fn columns(&self) -> usize {
        self.plot_width as usize
    }

    /// Maps a price to a row offset within the price area (0 = top).
    fn price_to_y(&self, price: f64, y_min: f64, y_max: f64) -> u16 {
        if (y_max - y_min).abs() < 1e-9 || self.price_height == 0 {
            return 0;
        }
        let frac = (price - y_min) / (y_max - y_min);
        let y = f64::from(self.price_height.saturating_sub(1)) * (1.0 - frac);
        y.round()
            .clamp(0.0, f64::from(self.price_height.saturating_sub(1))) as u16
    }

    /// Draws top/middle/bottom price labels in the left margin.
    fn draw_axis_labels(&self, buf: &mut Buffer, y_lower: f64, y_upper: f64) {
        let style = Style::default().fg(Color::DarkGray);
        let labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let rows = [0, self.price_height / 2, self.price_height.saturating_sub(1)];
        for (value, row) in labels.iter().zip(rows.iter()) {
            let text = format!("{value:>7.2}");
            buf.set_string(self.label_x, self.price_top + row, &text, style);
        }
    }

    /// Draws the volume sub-panel, one scaled column per bar.
    fn draw_volume(&self, buf: &mut Buffer, bars: &[Bar]) {
        if self.volume_height == 0 {
            return;
        }

        let max_volume = bars.iter().map(|b| b.volume).fold(0.0_f64, f64::max);
        if max_volume <= 0.0 {
            return;
        }

        let style = Style::default().fg(Color::Blue);
        for (i, bar) in bars.iter().take(self.columns()).enumerate() {
            let x = self.plot_left + i as u16;
            let filled = ((bar.volume / max_volume) * f64::from(self.volume_height)).ceil() as u16;
            let filled = filled.min(self.volume_height);
            for row in 0..filled {
                let y = self.volume_top + self.volume_height - 1 - row;
                buf.set_string(x, y, "\u{2590}", style);
            }
        }

        buf.set_string(
            self.label_x,
            self.volume_top + self.volume_height / 2,
            "    vol",
            Style::default().fg(Color::DarkGray),
        );
    }
}

/// Price bounds with 5% padding over [min low, max high].
fn price_bounds(bars: &[Bar]) -> (f64, f64) {
    let min = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let max = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    pad_bounds(min, max)
}

/// Close-only bounds for the fallback line.
fn close_bounds(bars: &[Bar]) -> (f64, f64) {
    let min = bars.iter().map(|b| b.close).fold(f64::INFINITY, f64::min);
    let max = bars.iter().map(|b| b.close).fold(f64::NEG_INFINITY, f64::max);
    pad_bounds(min, max)
}

fn pad_bounds(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}
