//! Library facade for the dayview intraday session dashboard.
//!
//! This is a facade crate that re-exports functionality from the dayview
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use dayview_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::with_defaults()?;
//!     let report = run_report(
//!         &client,
//!         "SPY",
//!         chrono::Utc::now(),
//!         &ChartOptions::default(),
//!     )
//!     .await;
//!
//!     if let Some(chart) = &report.chart {
//!         print!("{chart}");
//!     }
//!     for (label, value) in &report.stats {
//!         println!("{label}: {value}");
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use dayview_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use dayview_fetch::{BarSource, ClientConfig, FetchClient};

// Re-export cleaning and session construction
#[cfg(feature = "session")]
pub use dayview_session::{build_session, clean_rows, filter_to_date};

// Re-export chart rendering
#[cfg(feature = "chart")]
pub use dayview_chart::{Chart, ChartOptions, render_candles, render_line, sma};

// Re-export the pipeline
#[cfg(feature = "report")]
pub use dayview_report::{
    Outcome, Report, diagnostic_for, run_report, run_report_for_window, stats_rows,
};

/// Prelude module for convenient imports.
///
/// ```
/// use dayview_lib::prelude::*;
/// ```
pub mod prelude {
    pub use dayview_types::{
        Bar, DayviewError, RawRow, RenderError, Result, Session, SessionStats, TradingWindow,
    };

    #[cfg(feature = "fetch")]
    pub use dayview_fetch::{BarSource, ClientConfig, FetchClient};

    #[cfg(feature = "session")]
    pub use dayview_session::build_session;

    #[cfg(feature = "chart")]
    pub use dayview_chart::{Chart, ChartOptions};

    #[cfg(feature = "report")]
    pub use dayview_report::{Outcome, Report, run_report, run_report_for_window};
}
