use iniguard_types::ConfigValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `iniguard.toml` schema v1.
///
/// This is a *user-facing* config model: unknown keys are rejected so typos in a
/// security tool's settings surface immediately.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IniguardConfigV1 {
    /// Optional schema string for tooling (`iniguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Minimum level to report: `warning`, `error` or `fatal`. Absent reports everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,

    /// What to do with a rule that cannot be evaluated: `skip` (default) or `abort`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures_only: Option<bool>,

    /// Runtime defaults for settings missing from the audited configuration.
    #[serde(default)]
    pub defaults: BTreeMap<String, ConfigValue>,
}
