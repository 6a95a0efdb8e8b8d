//! Core types for the dayview intraday session dashboard.
//!
//! This crate provides the fundamental data structures used throughout
//! dayview:
//!
//! - [`Bar`] - A single 1-minute OHLCV observation
//! - [`Session`] - The ordered bars of one calendar trading day
//! - [`SessionStats`] - Statistics derived from a non-empty session
//! - [`TradingWindow`] - The previous-day date window to fetch
//! - [`DayviewError`] - The error taxonomy shared by all stages

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod raw;
mod session;
mod window;

pub use bar::Bar;
pub use error::{DayviewError, RenderError, Result, WindowError};
pub use raw::RawRow;
pub use session::{Session, SessionStats};
pub use window::TradingWindow;
