//! Terminal chart rendering for dayview.
//!
//! This crate draws a session into an off-screen ratatui buffer:
//!
//! - [`render_candles`] - Candlestick panel with volume and SMA overlays
//! - [`render_line`] - The simpler close-line fallback
//! - [`ChartOptions`] - Display options shared by both renderers
//! - [`Chart`] - The rendered result, exposed as text lines
//!
//! Rendering can fail on a malformed session shape ([`RenderError`]); the
//! fallback accepts anything with at least one bar.
//!
//! [`RenderError`]: dayview_types::RenderError

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod options;
mod panel;
mod render;
mod sma;

pub use bucket::bucket_bars;
pub use options::ChartOptions;
pub use render::{Chart, render_candles, render_line};
pub use sma::sma;
