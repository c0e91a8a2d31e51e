use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read-only projection of a rule, as handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleValues {
    pub name: String,
    pub description: String,
    pub level: String,
    pub status: bool,
}

/// A rule that could not be evaluated during a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleFailure {
    pub rule: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub passed: u32,
    pub failed: u32,
}

impl StatusCounts {
    pub fn from_values(values: &[RuleValues]) -> Self {
        let mut counts = StatusCounts::default();
        for v in values {
            if v.status {
                counts.passed += 1;
            } else {
                counts.failed += 1;
            }
        }
        counts
    }
}

/// Outcome of one scan pass over a rule catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    pub verdict: Verdict,
    /// Minimum level applied when selecting `results`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    pub counts: StatusCounts,
    pub results: Vec<RuleValues>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RuleFailure>,
}
