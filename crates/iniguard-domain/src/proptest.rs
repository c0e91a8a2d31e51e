//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Value casting and byte-size expansion
//! - Section derivation from dotted paths
//! - Default memoization across repeated lookups

use crate::cast::{cast_powers, cast_value};
use crate::snapshot::{ConfigCache, ConfigSnapshot, section_of};
use crate::test_support::CountingProvider;
use iniguard_types::ConfigValue;
use proptest::prelude::*;

/// Strings that are neither boolean-like nor byte sizes.
fn arb_plain_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_ ]{0,15}").unwrap()
}

fn arb_setting_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,12}(\\.[a-z_]{1,12}){0,2}").unwrap()
}

proptest! {
    #[test]
    fn plain_strings_pass_through_cast(s in arb_plain_string()) {
        prop_assert_eq!(cast_value(ConfigValue::from(s.as_str())), ConfigValue::from(s.as_str()));
    }

    #[test]
    fn integers_other_than_zero_and_one_pass_through(i in any::<i64>()) {
        prop_assume!(i != 0 && i != 1);
        prop_assert_eq!(cast_value(ConfigValue::Int(i)), ConfigValue::Int(i));
    }

    #[test]
    fn byte_sizes_expand_by_suffix(n in 0i64..1_000_000, idx in 0usize..3) {
        let (suffix, factor) = [("K", 1i64 << 10), ("M", 1 << 20), ("G", 1 << 30)][idx];
        let raw = ConfigValue::from(format!("{n}{suffix}"));
        prop_assert_eq!(cast_powers(raw), ConfigValue::Int(n * factor));
    }

    #[test]
    fn trailing_garbage_is_not_a_byte_size(n in 0u32..100_000, tail in "[a-zA-Z]{1,3}") {
        let raw = ConfigValue::from(format!("{n}M{tail}"));
        prop_assert_eq!(cast_powers(raw.clone()), raw);
    }

    #[test]
    fn section_is_a_prefix_or_the_default(path in arb_setting_path()) {
        let section = section_of(&path);
        if path.contains('.') {
            let prefix = format!("{section}.");
            prop_assert!(path.starts_with(&prefix));
        } else {
            prop_assert_eq!(section, "PHP");
        }
    }

    #[test]
    fn repeated_lookups_query_the_provider_once(path in arb_setting_path(), repeats in 1usize..5) {
        let provider = CountingProvider::new("default");
        let mut cache = ConfigCache::new(ConfigSnapshot::new(), &provider);
        for _ in 0..repeats {
            prop_assert_eq!(cache.find_value(&path), ConfigValue::from("default"));
        }
        prop_assert_eq!(provider.calls(), 1);
    }
}
