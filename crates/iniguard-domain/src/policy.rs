/// What a scan does when a single rule cannot be evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnError {
    /// Record the failure and continue with the next rule.
    #[default]
    Skip,
    /// Stop the scan and return the error.
    Abort,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanPolicy {
    /// Minimum level a rule needs to be reported. `None` reports everything.
    pub threshold: Option<String>,
    pub on_error: OnError,
    /// Report only failing rules.
    pub failures_only: bool,
}

impl ScanPolicy {
    pub fn with_threshold(level: &str) -> Self {
        Self {
            threshold: Some(level.to_string()),
            ..Self::default()
        }
    }
}
