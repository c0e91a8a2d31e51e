//! Configuration snapshot and runtime default resolution.

use iniguard_types::ConfigValue;
use iniguard_types::ids::{DEFAULT_SECTION, SECTION_SEPARATOR};
use std::collections::BTreeMap;
use tracing::debug;

/// Section name -> setting key -> value.
///
/// Keys are stored under their full dotted path (`session.cookie_secure` lives in
/// section `session` under the key `session.cookie_secure`).
pub type ConfigSnapshot = BTreeMap<String, BTreeMap<String, ConfigValue>>;

/// Section a dotted setting path belongs to.
///
/// `"session.cookie_secure"` -> `"session"`; paths without a separator belong to
/// [`DEFAULT_SECTION`].
pub fn section_of(path: &str) -> &str {
    match path.split_once(SECTION_SEPARATOR) {
        Some((section, _)) => section,
        None => DEFAULT_SECTION,
    }
}

/// Source of the live runtime value for settings missing from the snapshot.
pub trait DefaultProvider {
    /// Current default for `key`. Unset settings report [`ConfigValue::Null`] or
    /// whatever the provider uses to represent "unset".
    fn get_default(&self, key: &str) -> ConfigValue;
}

impl<F> DefaultProvider for F
where
    F: Fn(&str) -> ConfigValue,
{
    fn get_default(&self, key: &str) -> ConfigValue {
        self(key)
    }
}

/// Map-backed provider, typically filled from the `[defaults]` table of the settings file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticDefaults {
    values: BTreeMap<String, ConfigValue>,
}

impl StaticDefaults {
    pub fn new(values: BTreeMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DefaultProvider for StaticDefaults {
    fn get_default(&self, key: &str) -> ConfigValue {
        self.values.get(key).cloned().unwrap_or(ConfigValue::Null)
    }
}

/// A snapshot paired with the provider used to fill its gaps.
///
/// [`ConfigCache::find_value`] has an observable side effect: a miss queries the
/// provider once and stores the answer in the snapshot, so later lookups of the
/// same path (from any rule sharing this cache) are served from the snapshot.
/// The `&mut self` receiver keeps the read-then-insert sequence exclusive.
pub struct ConfigCache<'p> {
    snapshot: ConfigSnapshot,
    provider: &'p dyn DefaultProvider,
}

impl<'p> ConfigCache<'p> {
    pub fn new(snapshot: ConfigSnapshot, provider: &'p dyn DefaultProvider) -> Self {
        Self { snapshot, provider }
    }

    /// Effective value at `path`, querying and memoizing the runtime default on a miss.
    pub fn find_value(&mut self, path: &str) -> ConfigValue {
        let section = section_of(path);
        if let Some(value) = self.lookup(path) {
            return value.clone();
        }

        let value = self.provider.get_default(path);
        debug!(key = %path, section = %section, value = %value, "memoized runtime default");
        self.snapshot
            .entry(section.to_string())
            .or_default()
            .insert(path.to_string(), value.clone());
        value
    }

    /// Snapshot value at `path`, without consulting the provider.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        self.snapshot.get(section_of(path))?.get(path)
    }

    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> ConfigSnapshot {
        self.snapshot
    }
}
