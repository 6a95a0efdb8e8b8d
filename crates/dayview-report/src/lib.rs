//! One-shot pipeline orchestration for the dayview dashboard.
//!
//! This crate wires the stages together:
//!
//! - [`run_report`] - Window selection, fetch, clean, render, in one pass
//! - [`Report`] - What the embedding surface displays
//! - [`Outcome`] - The terminal state the run reached
//! - [`diagnostic_for`] - Error kind to user prose, one message per variant

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pipeline;
mod report;

pub use pipeline::{run_report, run_report_for_window};
pub use report::{Outcome, Report, diagnostic_for, stats_rows};
