//! Day filtering, row cleaning, and session construction for dayview.
//!
//! This crate turns the fetch result into a usable [`Session`]:
//!
//! - [`filter_to_date`] - Restricts rows to the target calendar day
//! - [`clean_rows`] - Coerces rows into valid [`Bar`]s, dropping the rest
//! - [`build_session`] - The staged pipeline with distinguishable empties
//!
//! [`Session`]: dayview_types::Session
//! [`Bar`]: dayview_types::Bar

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod build;
mod clean;

pub use build::build_session;
pub use clean::{clean_rows, filter_to_date};
