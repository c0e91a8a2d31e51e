use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single runtime configuration value.
///
/// Values arrive loosely typed (`"On"`, `"128M"`, `1`, `0.5`, `null`), so the snapshot
/// keeps them as-is and normalization happens at comparison time.
///
/// Integers outside the `i64` range are held as `Float`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
            ConfigValue::Str(s) => f.write_str(s),
            ConfigValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        ConfigValue::List(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_untagged_json() {
        let values: Vec<ConfigValue> = serde_json::from_str(r#"[null, true, 5, "On"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ConfigValue::Null,
                ConfigValue::Bool(true),
                ConfigValue::Int(5),
                ConfigValue::from("On"),
            ]
        );
    }

    #[test]
    fn deserializes_floats_lists_and_large_integers() {
        let values: Vec<ConfigValue> =
            serde_json::from_str(r#"[0.5, ["exec", 1], 18446744073709551615]"#).unwrap();
        assert_eq!(values[0], ConfigValue::Float(0.5));
        assert_eq!(
            values[1],
            ConfigValue::List(vec![ConfigValue::from("exec"), ConfigValue::Int(1)])
        );
        assert_eq!(values[2], ConfigValue::Float(u64::MAX as f64));
    }

    #[test]
    fn lists_display_comma_separated() {
        let list = ConfigValue::from(vec![ConfigValue::from("exec"), ConfigValue::from("system")]);
        assert_eq!(list.to_string(), "exec,system");
        assert_eq!(list.as_list().map(<[ConfigValue]>::len), Some(2));
        assert_eq!(ConfigValue::Float(0.01).to_string(), "0.01");
    }

    #[test]
    fn display_is_the_raw_value() {
        assert_eq!(ConfigValue::from("128M").to_string(), "128M");
        assert_eq!(ConfigValue::Int(0).to_string(), "0");
        assert_eq!(ConfigValue::Null.to_string(), "null");
    }
}
