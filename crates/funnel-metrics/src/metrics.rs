//! Funnel conversion arithmetic
//!
//! Pure functions over an ordered stage sequence. No state, no I/O; safe to
//! call concurrently from any number of threads.

use crate::error::{FunnelError, FunnelResult};
use crate::types::{FunnelReport, FunnelStage, FunnelSummary, StageMetrics};

/// Round to one decimal place, the display precision of every rate
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `previous` that reached `current`, rounded to one decimal.
///
/// Policy for a zero-valued previous stage: returns 0.0. Division by zero is
/// legal input here (drop-off data can legitimately empty out a stage), so the
/// result must stay finite rather than leak NaN or infinity into display.
pub fn conversion_rate(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    round1((current as f64 / previous as f64) * 100.0)
}

fn validate(stages: &[FunnelStage]) -> FunnelResult<()> {
    if stages.is_empty() {
        return Err(FunnelError::EmptyFunnel);
    }
    for (index, stage) in stages.iter().enumerate() {
        if stage.name.is_empty() {
            return Err(FunnelError::UnnamedStage { index });
        }
    }
    Ok(())
}

/// Per-stage conversion, drop-off and attrition for an ordered funnel.
///
/// The entry stage is defined as 100.0 conversion, 0.0 drop-off, 0 attrition.
/// Each later stage is measured against its immediate predecessor. Output
/// preserves input order and length.
pub fn stage_metrics(stages: &[FunnelStage]) -> FunnelResult<Vec<StageMetrics>> {
    validate(stages)?;

    let mut metrics = Vec::with_capacity(stages.len());
    for (index, stage) in stages.iter().enumerate() {
        let (rate, drop_off, attrition) = if index == 0 {
            (100.0, 0.0, 0)
        } else {
            let previous = stages[index - 1].value;
            let rate = conversion_rate(stage.value, previous);
            // Negative drop-off/attrition on non-monotonic input is surfaced,
            // not clamped: it flags a data-quality problem upstream.
            (
                rate,
                round1(100.0 - rate),
                previous as i64 - stage.value as i64,
            )
        };

        tracing::debug!(
            stage = index,
            name = %stage.name,
            value = stage.value,
            conversion_rate = rate,
            drop_off_rate = drop_off,
            "computed stage metrics"
        );

        metrics.push(StageMetrics {
            name: stage.name.clone(),
            value: stage.value,
            conversion_rate: rate,
            drop_off_rate: drop_off,
            attrition,
        });
    }

    Ok(metrics)
}

/// End-to-end summary: last stage measured against the first.
///
/// A single-stage funnel reports 100.0 by policy (first and last coincide,
/// even when the lone count is zero).
pub fn overall_conversion(stages: &[FunnelStage]) -> FunnelResult<FunnelSummary> {
    validate(stages)?;

    let entry = stages[0].value;
    // Validation guarantees at least one element
    let exit = stages[stages.len() - 1].value;

    let overall = if stages.len() == 1 {
        100.0
    } else {
        conversion_rate(exit, entry)
    };

    Ok(FunnelSummary {
        total_entries: entry,
        total_conversions: exit,
        total_attrition: entry as i64 - exit as i64,
        overall_conversion_rate: overall,
    })
}

/// Full funnel analysis: per-stage metrics plus the overall summary
pub fn analyze(stages: &[FunnelStage]) -> FunnelResult<FunnelReport> {
    let metrics = stage_metrics(stages)?;
    let summary = overall_conversion(stages)?;

    tracing::debug!(
        stages = metrics.len(),
        total_entries = summary.total_entries,
        overall_conversion_rate = summary.overall_conversion_rate,
        "funnel analysis complete"
    );

    Ok(FunnelReport {
        stages: metrics,
        summary,
    })
}
