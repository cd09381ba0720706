//! Inverse standard-normal CDF (quantile function)

// Acklam's rational approximation, split into central and tail regions.
// Relative error stays below 1.2e-9 over (0, 1), well inside the 7
// significant digits the CLI displays.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

const P_LOW: f64 = 0.02425;

/// Standard normal quantile: the x at which the normal CDF equals `p`.
///
/// `p <= 0` and `p >= 1` map to the infinities; callers validate range
/// before asking for a finite quantile.
pub fn inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p > 1.0 - P_LOW {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    } else {
        central(p)
    }
}

fn central(p: f64) -> f64 {
    let q = p - 0.5;
    let r = q * q;
    let num = ((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5];
    let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
    num * q / den
}

// Lower-tail branch; the upper tail mirrors it by symmetry.
fn tail(q: f64) -> f64 {
    let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
    let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.975, 1.9599640)]
    #[case(0.995, 2.5758293)]
    #[case(0.9, 1.2815516)]
    #[case(0.99, 2.3263479)]
    #[case(0.01, -2.3263479)]
    // tail branch
    #[case(0.001, -3.0902323)]
    fn matches_statistical_tables(#[case] p: f64, #[case] expected: f64) {
        assert!(
            (inverse_cdf(p) - expected).abs() < 1e-6,
            "quantile({p}): expected {expected}, got {}",
            inverse_cdf(p)
        );
    }

    #[test]
    fn median_is_zero() {
        assert!(inverse_cdf(0.5).abs() < 1e-12);
    }

    #[test]
    fn antisymmetric_around_the_median() {
        for p in [0.001, 0.02, 0.2, 0.4] {
            assert!((inverse_cdf(p) + inverse_cdf(1.0 - p)).abs() < 1e-8);
        }
    }

    #[test]
    fn out_of_range_maps_to_infinities() {
        assert_eq!(inverse_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_cdf(1.0), f64::INFINITY);
    }
}
