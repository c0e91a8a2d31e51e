//! Normalization of raw configuration values.
//!
//! Runtime settings are written loosely: `On`/`Off`, `1`/`0`, and byte sizes
//! with a `K`/`M`/`G` suffix. Operations compare values after casting so that
//! `"Off"`, `""`, `"0"` and `0` all read as the same thing.

use iniguard_types::ConfigValue;

/// Collapse boolean-like values to `0`/`1`, then expand byte-size suffixes.
pub fn cast_value(raw: ConfigValue) -> ConfigValue {
    let value = if is_canonical_false(&raw) {
        ConfigValue::Int(0)
    } else if is_canonical_true(&raw) {
        ConfigValue::Int(1)
    } else {
        raw
    };
    cast_powers(value)
}

/// Expand strings of the exact form `<digits><K|M|G>` into a byte count.
///
/// Anything else, including suffixes in lowercase, trailing garbage, or a
/// product that does not fit into `i64`, is returned unchanged.
pub fn cast_powers(value: ConfigValue) -> ConfigValue {
    let ConfigValue::Str(s) = &value else {
        return value;
    };
    match parse_power(s) {
        Some(bytes) => ConfigValue::Int(bytes),
        None => value,
    }
}

fn parse_power(s: &str) -> Option<i64> {
    let (digits, exponent) = if let Some(d) = s.strip_suffix('K') {
        (d, 1)
    } else if let Some(d) = s.strip_suffix('M') {
        (d, 2)
    } else if let Some(d) = s.strip_suffix('G') {
        (d, 3)
    } else {
        return None;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let base: i64 = digits.parse().ok()?;
    base.checked_mul(1024_i64.pow(exponent))
}

fn is_canonical_false(v: &ConfigValue) -> bool {
    match v {
        ConfigValue::Str(s) => matches!(s.as_str(), "Off" | "" | "0"),
        ConfigValue::Int(i) => *i == 0,
        _ => false,
    }
}

fn is_canonical_true(v: &ConfigValue) -> bool {
    match v {
        ConfigValue::Str(s) => matches!(s.as_str(), "On" | "1"),
        ConfigValue::Int(i) => *i == 1,
        _ => false,
    }
}
