//! Lower-confidence-bound score estimators
//!
//! Both estimators replace a naive point estimate with the lower edge of a
//! two-sided confidence interval, so items with few ratings score
//! conservatively until the evidence accumulates.

use crate::domain::error::DomainError;
use crate::domain::normal::inverse_cdf;

/// Two-sided z quantile for a confidence level in (0, 1).
fn z_quantile(confidence: f64) -> Result<f64, DomainError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(DomainError::InvalidConfidence { value: confidence });
    }
    Ok(inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

/// Lower bound of the Wilson score confidence interval for a binomial
/// proportion.
///
/// See <https://www.evanmiller.org/how-not-to-sort-by-average-rating.html>
pub fn wilson_score(positive: u64, total: u64, confidence: f64) -> Result<f64, DomainError> {
    let z = z_quantile(confidence)?;
    if total == 0 {
        return Err(DomainError::EmptySample);
    }
    if positive > total {
        return Err(DomainError::PositiveExceedsTotal { positive, total });
    }

    let n = total as f64;
    let p_hat = positive as f64 / n;
    let z2 = z * z;

    let center = p_hat + z2 / (2.0 * n);
    let margin = z * ((p_hat * (1.0 - p_hat) + z2 / (4.0 * n)) / n).sqrt();
    let denominator = 1.0 + z2 / n;

    Ok((center - margin) / denominator)
}

/// Lower confidence bound on the true mean of ordinal ratings.
///
/// `level_counts` are 1-indexed rating buckets: `level_counts[0]` holds the
/// number of 1-star ratings, and so on. Add-one smoothing (uniform Dirichlet
/// prior) keeps empty buckets from collapsing the variance estimate; the
/// `+1` / `+K` terms are part of the contract, not an optimization.
///
/// The bound is not clamped: with the mass concentrated in the bottom
/// bucket it can dip marginally below level 1 (e.g. `[100, 0, 0, 0, 0]`
/// at 95% confidence scores 0.9951100).
pub fn ordinal_score(level_counts: &[u64], confidence: f64) -> Result<f64, DomainError> {
    let z = z_quantile(confidence)?;
    if level_counts.len() < 2 {
        return Err(DomainError::NotEnoughLevels {
            got: level_counts.len(),
        });
    }
    let n: u64 = level_counts.iter().sum();
    if n == 0 {
        return Err(DomainError::DegenerateCounts);
    }

    let k = level_counts.len() as f64;
    let smoothed_total = n as f64 + k;

    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    for (i, count) in level_counts.iter().enumerate() {
        let level = (i + 1) as f64;
        let weight = (count + 1) as f64 / smoothed_total;
        sum1 += level * weight;
        sum2 += level * level * weight;
    }

    Ok(sum1 - z * ((sum2 - sum1 * sum1) / (smoothed_total + 1.0)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_quantile_matches_the_usual_table_values() {
        assert!((z_quantile(0.95).unwrap() - 1.959964).abs() < 1e-6);
        assert!((z_quantile(0.99).unwrap() - 2.575829).abs() < 1e-6);
    }

    #[test]
    fn z_quantile_rejects_out_of_range_confidence() {
        for bad in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let err = z_quantile(bad).unwrap_err();
            assert!(matches!(err, DomainError::InvalidConfidence { .. }));
        }
    }

    #[test]
    fn confidence_is_validated_before_count_checks() {
        // errors are detected eagerly, even when the counts are also bad
        let err = wilson_score(5, 0, 1.5).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfidence { .. }));
    }
}
