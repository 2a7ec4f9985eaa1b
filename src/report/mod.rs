//! Reporting and plotting helpers.
//!
//! `plots` converts the aggregates from `crate::stats` into `plotly::Plot`
//! values; `html` bundles a sequence of plots into one standalone document.
//! Nothing here displays anything on its own.
pub mod html;
pub mod plots;
