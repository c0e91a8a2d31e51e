//! Pure rule evaluation (no IO).
//!
//! Input: a rule catalog and a configuration snapshot constructed elsewhere.
//! Output: per-rule pass/fail status and a threshold-filtered scan report.

#![forbid(unsafe_code)]

pub mod cast;
pub mod error;
pub mod operation;
pub mod policy;
pub mod rule;
pub mod snapshot;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::scan;
pub use error::RuleError;
pub use operation::{Operation, OperationContext, OperationFactory, OperationRegistry};
pub use rule::{PolicyDefinition, Rule, TestDefinition};
pub use snapshot::{ConfigCache, ConfigSnapshot, DefaultProvider, StaticDefaults, section_of};
