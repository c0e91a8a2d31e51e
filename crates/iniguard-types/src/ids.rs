//! Stable identifiers and labels.

/// Section label used when a setting path carries no `.` separator.
pub const DEFAULT_SECTION: &str = "PHP";

/// Separator between the section prefix and the rest of a setting path.
pub const SECTION_SEPARATOR: char = '.';

// Severity labels
pub const LEVEL_WARNING: &str = "warning";
pub const LEVEL_ERROR: &str = "error";
pub const LEVEL_FATAL: &str = "fatal";

// Config schema
pub const SCHEMA_CONFIG_V1: &str = "iniguard.config.v1";
