//! The rule entity.
//!
//! A rule couples policy metadata (name, level, target version) with one test:
//! an operation applied to a single setting. Rules start out passing; only
//! [`Rule::evaluate`] and the explicit status setters change that.

use crate::error::RuleError;
use crate::operation::{OperationContext, OperationRegistry};
use crate::snapshot::{ConfigCache, section_of};
use iniguard_types::{ConfigValue, RuleValues, severity_rank};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The fields [`Rule::set_config`] accepts. Anything else is rejected.
pub const RULE_FIELDS: &[&str] = &[
    "name",
    "description",
    "level",
    "version",
    "section",
    "test",
    "status",
];

/// What a rule checks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestDefinition {
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<ConfigValue>>,
}

impl TestDefinition {
    pub fn new(operation: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            key: Some(key.into()),
            value: None,
            context: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<ConfigValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_context(mut self, context: Vec<ConfigValue>) -> Self {
        self.context = Some(context);
        self
    }
}

/// One catalog entry as produced by a catalog loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub test: TestDefinition,
    /// Initial status; rules start passing when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFields {
    name: Option<String>,
    description: Option<String>,
    level: Option<String>,
    version: Option<String>,
    section: Option<String>,
    test: Option<TestDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    name: String,
    description: String,
    level: String,
    version: String,
    section: Option<String>,
    test: TestDefinition,
    status: bool,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            level: String::new(),
            version: String::new(),
            section: None,
            test: TestDefinition::default(),
            status: true,
        }
    }
}

impl Rule {
    pub fn new(name: impl Into<String>, test: TestDefinition) -> Self {
        Self {
            name: name.into(),
            test,
            ..Self::default()
        }
    }

    pub fn from_definition(def: PolicyDefinition) -> Self {
        Self {
            name: def.name,
            description: def.description,
            level: def.level,
            version: def.version,
            section: explicit_section(def.section),
            test: def.test,
            status: def.status.unwrap_or(true),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = explicit_section(Some(section.into()));
        self
    }

    /// Bulk-assign fields from a loosely-typed object.
    ///
    /// Only [`RULE_FIELDS`] are accepted and absent fields keep their value. The
    /// input is fully validated before anything is assigned.
    pub fn set_config(&mut self, fields: Value) -> Result<(), RuleError> {
        let mut obj = match fields {
            Value::Object(obj) => obj,
            other => {
                return Err(RuleError::InvalidField {
                    message: format!("expected an object, found {other}"),
                });
            }
        };

        if let Some(field) = obj.keys().find(|k| !RULE_FIELDS.contains(&k.as_str())) {
            return Err(RuleError::UnknownField {
                field: field.clone(),
            });
        }

        let status = obj.remove("status").map(|raw| parse_status(&raw)).transpose()?;
        let parsed: RuleFields = serde_json::from_value(Value::Object(obj))
            .map_err(|e| RuleError::InvalidField {
                message: e.to_string(),
            })?;

        if let Some(name) = parsed.name {
            self.name = name;
        }
        if let Some(description) = parsed.description {
            self.description = description;
        }
        if let Some(level) = parsed.level {
            self.level = level;
        }
        if let Some(version) = parsed.version {
            self.version = version;
        }
        if let Some(section) = parsed.section {
            self.section = explicit_section(Some(section));
        }
        if let Some(test) = parsed.test {
            self.test = test;
        }
        if let Some(status) = status {
            self.status = status;
        }
        Ok(())
    }

    /// Stored section when `path` is `None`; otherwise the section derived from `path`.
    pub fn get_section<'a>(&'a self, path: Option<&'a str>) -> Option<&'a str> {
        match path {
            None => self.section.as_deref(),
            Some(path) => Some(section_of(path)),
        }
    }

    /// Explicit section if one is set, else the section of the test key.
    pub fn effective_section(&self) -> Result<&str, RuleError> {
        match self.section.as_deref() {
            Some(section) => Ok(section),
            None => self.get_test_key().map(section_of),
        }
    }

    pub fn get_test_key(&self) -> Result<&str, RuleError> {
        self.test
            .key
            .as_deref()
            .ok_or_else(|| RuleError::MissingTestKey {
                rule: self.name.clone(),
            })
    }

    pub fn set_status(&mut self, flag: bool) {
        self.status = flag;
    }

    /// Set the status from a loosely-typed value; anything but a JSON boolean is rejected.
    pub fn set_status_value(&mut self, flag: &Value) -> Result<(), RuleError> {
        self.status = parse_status(flag)?;
        Ok(())
    }

    pub fn pass(&mut self) {
        self.status = true;
    }

    pub fn fail(&mut self) {
        self.status = false;
    }

    pub fn get_status(&self) -> bool {
        self.status
    }

    pub fn get_level(&self) -> &str {
        &self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn test(&self) -> &TestDefinition {
        &self.test
    }

    /// Whether this rule is severe enough to report under a minimum level.
    pub fn respect_threshold(&self, wanted: Option<&str>) -> bool {
        match wanted {
            None => true,
            Some(wanted) => severity_rank(&self.level) >= severity_rank(wanted),
        }
    }

    pub fn values(&self) -> RuleValues {
        RuleValues {
            name: self.name.clone(),
            description: self.description.clone(),
            level: self.level.clone(),
            status: self.status,
        }
    }

    /// Run the rule's operation and record the outcome.
    ///
    /// The key and operation are checked before anything runs, so on error the
    /// previous status is left untouched. A successful evaluation may grow the
    /// cache's snapshot with memoized defaults.
    pub fn evaluate(
        &mut self,
        registry: &OperationRegistry,
        cache: &mut ConfigCache<'_>,
    ) -> Result<bool, RuleError> {
        let key = self.get_test_key()?;
        let factory = registry.resolve(&self.test.operation)?;
        let section = self.effective_section()?;

        let ctx = OperationContext::new(section, self.test.context.clone().unwrap_or_default());
        let operation = factory(ctx);
        let passed = operation.execute(key, self.test.value.as_ref(), cache);

        debug!(
            rule = %self.name,
            operation = %self.test.operation,
            key = %key,
            passed,
            "evaluated rule"
        );

        if passed {
            self.pass();
        } else {
            self.fail();
        }
        Ok(passed)
    }
}

impl TryFrom<Value> for Rule {
    type Error = RuleError;

    fn try_from(fields: Value) -> Result<Self, Self::Error> {
        let mut rule = Rule::default();
        rule.set_config(fields)?;
        Ok(rule)
    }
}

// An empty section is stored as unset.
fn explicit_section(section: Option<String>) -> Option<String> {
    section.filter(|s| !s.is_empty())
}

fn parse_status(raw: &Value) -> Result<bool, RuleError> {
    raw.as_bool().ok_or_else(|| RuleError::InvalidStatus {
        found: raw.to_string(),
    })
}
