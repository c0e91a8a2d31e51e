//! Severity ranking.
//!
//! Levels are an open set of labels. Only the labels in [`SEVERITY_TABLE`] carry
//! a rank; everything else ranks `0`, below every known level. Ranks are only
//! meant for ordinal comparison.

use crate::ids::{LEVEL_ERROR, LEVEL_FATAL, LEVEL_WARNING};

/// Known severity labels and their ranks, lowest first.
pub const SEVERITY_TABLE: &[(&str, u32)] =
    &[(LEVEL_WARNING, 10), (LEVEL_ERROR, 20), (LEVEL_FATAL, 30)];

/// Rank of a severity label (case-insensitive). Unknown labels rank `0`.
pub fn severity_rank(label: &str) -> u32 {
    let label = label.trim();
    SEVERITY_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(label))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Whether `label` appears in [`SEVERITY_TABLE`].
pub fn is_known_level(label: &str) -> bool {
    severity_rank(label) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_are_ranked_in_order() {
        assert_eq!(severity_rank("warning"), 10);
        assert_eq!(severity_rank("error"), 20);
        assert_eq!(severity_rank("fatal"), 30);
    }

    #[test]
    fn ranking_ignores_case() {
        assert_eq!(severity_rank("WARNING"), 10);
        assert_eq!(severity_rank("Fatal"), 30);
    }

    #[test]
    fn unknown_levels_rank_zero() {
        assert_eq!(severity_rank("notice"), 0);
        assert_eq!(severity_rank(""), 0);
        assert!(!is_known_level("critical"));
        assert!(is_known_level("error"));
    }
}
