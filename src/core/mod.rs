//! Core data layer: the statistics table, metrics, and chart specs.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod chart;
pub mod dataset;
pub mod format;
pub mod metric;
pub mod report;
pub mod summary;
