//! Tests for the smoothed ordinal lower-bound estimator

use rstest::rstest;

use truescore::domain::{ordinal_score, DomainError};

// reference values are quoted to 7 significant digits
const EPS: f64 = 1e-5;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(0.95, 3.495104)]
#[case(0.99, 3.438576)]
fn given_known_counts_when_scoring_then_matches_reference(
    #[case] conf: f64,
    #[case] expected: f64,
) {
    let score = ordinal_score(&[4, 6, 35, 45, 25], conf).unwrap();
    assert_approx(score, expected);
}

#[rstest]
#[case(vec![4, 6, 35, 45, 25])]
#[case(vec![0, 0, 0, 0, 100])]
#[case(vec![20, 20, 20, 20, 20])]
#[case(vec![1, 1])]
fn given_well_formed_counts_when_scoring_then_within_level_range(#[case] counts: Vec<u64>) {
    let k = counts.len() as f64;
    let score = ordinal_score(&counts, 0.95).unwrap();
    assert!(
        (1.0..=k).contains(&score),
        "score {score} outside [1, {k}] for {counts:?}"
    );
}

#[test]
fn given_bottom_heavy_counts_when_scoring_then_bound_dips_just_below_one() {
    // unclamped: the lower bound sits marginally below level 1 when the
    // mass concentrates in the bottom bucket
    let score = ordinal_score(&[100, 0, 0, 0, 0], 0.95).unwrap();
    assert!(score < 1.0, "expected a bound below level 1, got {score}");
    assert!(score > 0.95, "bound dipped too far: {score}");
}

#[test]
fn given_top_heavy_counts_when_scoring_then_score_stays_high() {
    let score = ordinal_score(&[0, 0, 0, 0, 100], 0.95).unwrap();
    assert!(score > 4.0);
    assert!(score < 5.0);
}

#[test]
fn given_lower_confidence_when_scoring_then_score_increases() {
    let conservative = ordinal_score(&[4, 6, 35, 45, 25], 0.99).unwrap();
    let loose = ordinal_score(&[4, 6, 35, 45, 25], 0.80).unwrap();
    assert!(conservative < loose);
}

#[test]
fn given_smoothing_when_bucket_is_empty_then_variance_stays_finite() {
    // all mass in one bucket would have zero raw variance; the add-one
    // prior must still produce a strict lower bound
    let score = ordinal_score(&[0, 50], 0.95).unwrap();
    let raw_mean = 2.0;
    assert!(score < raw_mean);
    assert!(score.is_finite());
}

#[test]
fn given_single_bucket_when_scoring_then_errors() {
    let err = ordinal_score(&[5], 0.95).unwrap_err();
    assert_eq!(err, DomainError::NotEnoughLevels { got: 1 });
}

#[test]
fn given_no_buckets_when_scoring_then_errors() {
    let err = ordinal_score(&[], 0.95).unwrap_err();
    assert_eq!(err, DomainError::NotEnoughLevels { got: 0 });
}

#[test]
fn given_all_zero_counts_when_scoring_then_errors() {
    let err = ordinal_score(&[0, 0, 0], 0.95).unwrap_err();
    assert_eq!(err, DomainError::DegenerateCounts);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
fn given_out_of_range_confidence_when_scoring_then_errors(#[case] conf: f64) {
    let err = ordinal_score(&[4, 6, 35, 45, 25], conf).unwrap_err();
    assert!(matches!(err, DomainError::InvalidConfidence { .. }));
}
