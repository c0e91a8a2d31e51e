use crate::error::RuleError;
use crate::operation::OperationRegistry;
use crate::policy::{OnError, ScanPolicy};
use crate::rule::Rule;
use crate::snapshot::ConfigCache;
use iniguard_types::{RuleFailure, RuleValues, ScanReport, StatusCounts, Verdict, severity_rank};
use tracing::warn;

/// Evaluate every rule against one shared cache and build the report.
///
/// Rules are evaluated in order, so defaults memoized by an earlier rule are
/// visible to later ones. Rules that error are never reported as results, and a
/// scan that skipped any rule cannot pass.
pub fn scan(
    rules: &mut [Rule],
    registry: &OperationRegistry,
    cache: &mut ConfigCache<'_>,
    policy: &ScanPolicy,
) -> Result<ScanReport, RuleError> {
    let mut results: Vec<RuleValues> = Vec::new();
    let mut errors: Vec<RuleFailure> = Vec::new();

    for rule in rules.iter_mut() {
        match rule.evaluate(registry, cache) {
            Ok(_) => {}
            Err(err) if policy.on_error == OnError::Skip => {
                warn!(rule = %rule.name(), error = %err, "skipping rule");
                errors.push(RuleFailure {
                    rule: rule.name().to_string(),
                    message: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err),
        }

        if !rule.respect_threshold(policy.threshold.as_deref()) {
            continue;
        }
        if policy.failures_only && rule.get_status() {
            continue;
        }
        results.push(rule.values());
    }

    // Deterministic ordering for renderers.
    results.sort_by(compare_results);

    let counts = StatusCounts::from_values(&results);
    let verdict = if counts.failed > 0 || !errors.is_empty() {
        Verdict::Fail
    } else {
        Verdict::Pass
    };

    Ok(ScanReport {
        verdict,
        threshold: policy.threshold.clone(),
        counts,
        results,
        errors,
    })
}

fn compare_results(a: &RuleValues, b: &RuleValues) -> std::cmp::Ordering {
    // 1) severity rank, most severe first
    // 2) name
    severity_rank(&b.level)
        .cmp(&severity_rank(&a.level))
        .then(a.name.cmp(&b.name))
}
