use crate::model::IniguardConfigV1;
use anyhow::Context;
use iniguard_domain::StaticDefaults;
use iniguard_domain::policy::{OnError, ScanPolicy};
use iniguard_types::ids::SCHEMA_CONFIG_V1;
use iniguard_types::{SEVERITY_TABLE, severity::is_known_level};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub threshold: Option<String>,
    pub on_error: Option<String>,
    pub failures_only: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: ScanPolicy,
    pub defaults: StaticDefaults,
}

pub fn resolve_config(
    cfg: IniguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut policy = ScanPolicy::default();

    // Threshold
    if let Some(level) = overrides.threshold.or(cfg.threshold) {
        policy.threshold = Some(parse_threshold(&level).context("invalid threshold")?);
    }

    // Error handling
    if let Some(on_error) = overrides.on_error.or(cfg.on_error) {
        policy.on_error = parse_on_error(&on_error)?;
    }

    if let Some(failures_only) = overrides.failures_only.or(cfg.failures_only) {
        policy.failures_only = failures_only;
    }

    let defaults = StaticDefaults::new(cfg.defaults);

    Ok(ResolvedConfig { policy, defaults })
}

fn parse_threshold(v: &str) -> anyhow::Result<String> {
    if !is_known_level(v) {
        let known: Vec<&str> = SEVERITY_TABLE.iter().map(|(label, _)| *label).collect();
        anyhow::bail!("unknown level: {v} (expected {})", known.join("|"));
    }
    Ok(v.trim().to_ascii_lowercase())
}

fn parse_on_error(v: &str) -> anyhow::Result<OnError> {
    match v {
        "skip" => Ok(OnError::Skip),
        "abort" => Ok(OnError::Abort),
        other => anyhow::bail!("unknown on_error: {other} (expected 'skip' or 'abort')"),
    }
}
