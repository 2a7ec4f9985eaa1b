//! name-trends: exploratory analysis of yearly name-frequency census files.
//!
//! This crate loads the per-year `yob<YEAR>.txt` record files into a single
//! in-memory table and provides a set of independent reporting functions:
//! birth totals, most popular names, decade-representative names, a
//! naming-diversity trend, first/last-letter distributions, and annotated
//! trends for specific names.
//!
//! Aggregation (`stats`) is kept separate from rendering (`report::plots`):
//! every plot helper returns a `plotly::Plot` and leaves display or HTML
//! embedding to the caller.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;
