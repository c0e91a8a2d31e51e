use thiserror::Error;

/// Errors that abort evaluation of a single rule.
///
/// A missing configuration value is never an error; it resolves through the
/// runtime default provider instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule '{rule}' has no test key")]
    MissingTestKey { rule: String },

    #[error("rule status must be a boolean, found {found}")]
    InvalidStatus { found: String },

    #[error("no operation registered for '{operation}'")]
    UnknownOperation { operation: String },

    #[error("unknown rule field '{field}'")]
    UnknownField { field: String },

    #[error("invalid rule definition: {message}")]
    InvalidField { message: String },
}
