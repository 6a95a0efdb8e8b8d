//! Trait seam between the pipeline and the network.

use async_trait::async_trait;
use dayview_types::{RawRow, Result, TradingWindow};

/// A source of 1-minute rows for a symbol and window.
///
/// [`FetchClient`](crate::FetchClient) is the production implementation;
/// pipeline tests implement this with scripted rows so every downstream stage
/// can be exercised without a network.
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Returns the raw rows the provider has for `[window.start, window.end)`.
    ///
    /// An empty vec is a valid answer (closed market), not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DayviewError::Fetch`](dayview_types::DayviewError::Fetch)
    /// when the provider cannot be reached or answers with garbage.
    async fn minute_bars(&self, symbol: &str, window: &TradingWindow) -> Result<Vec<RawRow>>;
}
