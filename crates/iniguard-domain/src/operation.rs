//! Operation dispatch.
//!
//! An operation is a named boolean check ("equals", "contains", ...). Rules name
//! their operation as free text; the registry maps the canonical form of that text
//! to a factory registered at startup. There is no fallback: a name that was never
//! registered is an [`RuleError::UnknownOperation`].

use crate::cast::cast_value;
use crate::error::RuleError;
use crate::snapshot::ConfigCache;
use iniguard_types::ConfigValue;
use std::collections::BTreeMap;
use tracing::warn;

/// A check bound to one rule's section.
pub trait Operation {
    /// Evaluate `key` against `expected`. Implementations resolve the current value
    /// themselves through `cache`, which may memoize runtime defaults.
    fn execute(&self, key: &str, expected: Option<&ConfigValue>, cache: &mut ConfigCache<'_>)
    -> bool;
}

/// What an operation is constructed with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationContext {
    /// Section of the rule the operation is evaluated for.
    pub section: String,
    /// Extra ordered arguments from the rule's test definition.
    pub context: Vec<ConfigValue>,
}

impl OperationContext {
    pub fn new(section: impl Into<String>, context: Vec<ConfigValue>) -> Self {
        Self {
            section: section.into(),
            context,
        }
    }

    /// Resolve `key` through the cache and cast it to canonical form.
    pub fn resolve(&self, key: &str, cache: &mut ConfigCache<'_>) -> ConfigValue {
        cast_value(cache.find_value(key))
    }
}

pub type OperationFactory = fn(OperationContext) -> Box<dyn Operation>;

/// Canonical operation id: trimmed, ASCII uppercase, without `_`, `-` or whitespace.
///
/// `"equals"`, `"Equals"` and `"EQUALS"` name the same operation, as do
/// `"boolean_true"` and `"booleanTrue"`.
pub fn canonical_operation_id(name: &str) -> String {
    name.chars()
        .filter(|c| !(c.is_whitespace() || *c == '_' || *c == '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Closed mapping from canonical operation id to factory.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    factories: BTreeMap<String, OperationFactory>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under the canonical form of `name`, replacing any
    /// previous registration.
    pub fn register(&mut self, name: &str, factory: OperationFactory) {
        let id = canonical_operation_id(name);
        if self.factories.insert(id.clone(), factory).is_some() {
            warn!(operation = %id, "replaced registered operation");
        }
    }

    pub fn with(mut self, name: &str, factory: OperationFactory) -> Self {
        self.register(name, factory);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<OperationFactory, RuleError> {
        self.factories
            .get(&canonical_operation_id(name))
            .copied()
            .ok_or_else(|| RuleError::UnknownOperation {
                operation: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&canonical_operation_id(name))
    }

    /// Registered canonical ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("ids", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
