//! Config parsing and scan policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::IniguardConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `iniguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IniguardConfigV1> {
    let cfg: IniguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective scan policy and runtime defaults (config + overrides).
pub fn resolve_config(
    cfg: IniguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
