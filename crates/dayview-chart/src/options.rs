//! Chart display options.

/// Display options shared by the candle and fallback renderers.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Whether to draw the volume sub-panel.
    pub show_volume: bool,
    /// SMA window lengths to overlay on the price panel.
    pub moving_averages: Vec<usize>,
    /// Chart title.
    pub title: String,
    /// Total chart width in columns.
    pub width: u16,
    /// Total chart height in rows.
    pub height: u16,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_volume: true,
            moving_averages: vec![9, 21],
            title: String::new(),
            width: 80,
            height: 24,
        }
    }
}

impl ChartOptions {
    /// Returns a copy with the given title.
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
