//! Stable DTOs and IDs used across the iniguard workspace.
//!
//! This crate is intentionally boring:
//! - the dynamic configuration value type
//! - the severity table and ranking
//! - stable string IDs and labels
//! - report projections consumed by renderers

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;
pub mod severity;
pub mod value;

pub use report::{RuleFailure, RuleValues, ScanReport, StatusCounts, Verdict};
pub use severity::{SEVERITY_TABLE, severity_rank};
pub use value::ConfigValue;
