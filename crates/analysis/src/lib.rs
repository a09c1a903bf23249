//! Comparison analytics and chart datasets for the demo presentation layer.
//!
//! Everything here is derived from a pair of finished runs (standard, fast)
//! plus the scaling model; the presentation layer renders these values as-is.

pub mod charts;
pub mod comparison;
pub mod error;
pub mod report;

pub use report::ComparisonReport;
