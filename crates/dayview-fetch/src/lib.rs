//! Minute-bar acquisition for dayview.
//!
//! This crate provides the data-fetch side of the pipeline:
//!
//! - [`url::chart_url`] - Constructs the provider chart API URL
//! - [`FetchClient`] - HTTP client with timeout and user-agent defaults
//! - [`parse::parse_rows`] - Chart JSON to [`RawRow`] conversion
//! - [`BarSource`] - Trait seam between the pipeline and the network
//!
//! [`RawRow`]: dayview_types::RawRow

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dayview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchClient};
pub use source::BarSource;
