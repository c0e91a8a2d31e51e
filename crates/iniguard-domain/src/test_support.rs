use crate::cast::cast_value;
use crate::operation::{Operation, OperationContext, OperationRegistry};
use crate::rule::{Rule, TestDefinition};
use crate::snapshot::{ConfigCache, ConfigSnapshot, DefaultProvider};
use iniguard_types::ConfigValue;
use std::cell::Cell;

/// Provider that answers every key with the same value and counts queries.
pub struct CountingProvider {
    value: ConfigValue,
    calls: Cell<u32>,
}

impl CountingProvider {
    pub fn new(value: &str) -> Self {
        Self {
            value: ConfigValue::from(value),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl DefaultProvider for CountingProvider {
    fn get_default(&self, _key: &str) -> ConfigValue {
        self.calls.set(self.calls.get() + 1);
        self.value.clone()
    }
}

/// Minimal `equals` check: both sides cast, then compared.
pub struct Equals {
    ctx: OperationContext,
}

impl Equals {
    pub fn boxed(ctx: OperationContext) -> Box<dyn Operation> {
        Box::new(Equals { ctx })
    }
}

impl Operation for Equals {
    fn execute(
        &self,
        key: &str,
        expected: Option<&ConfigValue>,
        cache: &mut ConfigCache<'_>,
    ) -> bool {
        let actual = self.ctx.resolve(key, cache);
        let expected = cast_value(expected.cloned().unwrap_or_default());
        actual == expected
    }
}

pub fn registry_with_equals() -> OperationRegistry {
    OperationRegistry::new().with("equals", Equals::boxed)
}

/// Build a snapshot from `(section, key, value)` triples.
pub fn snapshot(entries: &[(&str, &str, &str)]) -> ConfigSnapshot {
    let mut snapshot = ConfigSnapshot::new();
    for (section, key, value) in entries {
        snapshot
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), ConfigValue::from(*value));
    }
    snapshot
}

pub fn equals_rule(name: &str, key: &str, value: &str, level: &str) -> Rule {
    Rule::new(name, TestDefinition::new("equals", key).with_value(value)).with_level(level)
}
