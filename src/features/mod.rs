//! Credit-scoring feature derivation.
//!
//! The external scoring model takes a small numeric feature vector, not the
//! raw month-by-month figures from the form. This module is that derivation:
//!
//! - per-series dispersion statistics (mean, population variance, CV)
//! - ordinal encoding of the community-engagement answer
//! - assembly of the wire-ready [`CreditFeatureRecord`]
//!
//! Everything here is pure and never fails. Malformed numeric input is
//! carried through as NaN and a zero-mean series yields a non-finite
//! stability ratio; both are forwarded to the scoring service as-is so the
//! model sees exactly what was derived.

use crate::domain::{CreditFeatureRecord, MonthlySeries, StabilityStats};

/// Mean, population variance, and coefficient of variation of a 3-month series.
///
/// The caller guarantees three parsed samples; entries that failed parsing
/// arrive as NaN and poison the statistics, which is the intended behavior.
/// When `mean == 0` the stability ratio divides by zero and comes out
/// non-finite; it is not guarded here.
pub fn stability_stats(series: &MonthlySeries) -> StabilityStats {
    let mean = (series[0] + series[1] + series[2]) / 3.0;
    let variance = series.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / 3.0;
    StabilityStats {
        mean,
        variance,
        stability: variance.sqrt() / mean,
    }
}

/// Ordinal score for the community-engagement answer.
///
/// Total over all strings: anything outside the fixed vocabulary (including
/// the empty selection) maps to 0.
pub fn engagement_score(label: &str) -> i64 {
    match label {
        "Never" => 0,
        "Rarely" => 2,
        "Sometimes" => 4,
        "Often" => 8,
        "Very frequently" => 10,
        _ => 0,
    }
}

/// Assemble the scoring payload from the three raw series plus the
/// engagement answer.
///
/// Income and expenses contribute their CV ratio and mean; yield contributes
/// its raw variance only (`yield_consistency`).
pub fn build_feature_record(
    income: &MonthlySeries,
    expenses: &MonthlySeries,
    yields: &MonthlySeries,
    engagement: &str,
) -> CreditFeatureRecord {
    let income_stats = stability_stats(income);
    let expense_stats = stability_stats(expenses);
    let yield_consistency = stability_stats(yields).variance;

    CreditFeatureRecord {
        income_stability: income_stats.stability,
        income_mean: income_stats.mean,
        expense_stability: expense_stats.stability,
        expense_mean: expense_stats.mean,
        yield_consistency,
        community_engagement: engagement_score(engagement),
    }
}

/// Lenient month-field parsing: trimmed `f64` parse, NaN on failure.
///
/// The form layer never rejects input; a garbled month propagates as NaN
/// through [`stability_stats`] into the outgoing record.
pub fn parse_month(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
