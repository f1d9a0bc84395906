// =========================================================================
// FALSIFY-NORM: Shapiro-Wilk contract (contrastar stats)
//
// Five-Whys:
//   Why 1: the normality verdict decides Pearson vs Spearman downstream
//   Why 2: it also drives the non-normality advisory before t-test/ANOVA
//   Why 3: AS R94 has three p-value regimes that are easy to mis-splice
//   Why 4: the W weights mix tabulated corrections with Blom scores
//   Why 5: a plausible-looking W can hide a broken tail fit
//
// References:
//   - Shapiro & Wilk (1965) "An analysis of variance test for normality"
//   - Royston (1995) "Remark AS R94: A remark on Algorithm AS 181"
// =========================================================================

use super::*;

/// FALSIFY-NORM-001: W statistic is always in (0, 1]
#[test]
fn falsify_norm_001_w_bounded() {
    let samples: [&[f32]; 3] = [
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[0.1, 0.2, 0.4, 0.8, 1.6, 3.2, 6.4],
        &[-3.0, -1.0, 0.0, 1.0, 3.0, 10.0],
    ];
    for sample in samples {
        let result = shapiro(sample).expect("valid input");
        assert!(
            result.statistic > 0.0 && result.statistic <= 1.0,
            "FALSIFIED NORM-001: W={} outside (0,1]",
            result.statistic
        );
        assert!(
            (0.0..=1.0).contains(&result.pvalue),
            "FALSIFIED NORM-001: p={} outside [0,1]",
            result.pvalue
        );
    }
}

/// FALSIFY-NORM-002: Symmetric bell-shaped data is not rejected
#[test]
fn falsify_norm_002_accepts_bell_shape() {
    // Coarse normal quantile spread, symmetric around 0
    let sample = vec![
        -2.0, -1.4, -1.0, -0.7, -0.45, -0.25, -0.1, 0.1, 0.25, 0.45, 0.7, 1.0, 1.4, 2.0,
    ];
    let result = shapiro(&sample).expect("valid input");

    assert!(
        result.pvalue > 0.05,
        "FALSIFIED NORM-002: bell-shaped sample rejected, p={}",
        result.pvalue
    );
}

/// FALSIFY-NORM-003: Exponentially growing data is rejected
#[test]
fn falsify_norm_003_rejects_exponential() {
    let sample: Vec<f32> = (0..12).map(|i| 2.0_f32.powi(i)).collect();
    let result = shapiro(&sample).expect("valid input");

    assert!(
        result.pvalue < 0.05,
        "FALSIFIED NORM-003: doubling sequence accepted, p={}",
        result.pvalue
    );
}

/// FALSIFY-NORM-004: W is invariant under affine transforms
#[test]
fn falsify_norm_004_affine_invariance() {
    let sample = vec![1.0, 2.0, 4.0, 5.0, 7.0, 8.0, 9.0, 11.0];
    let shifted: Vec<f32> = sample.iter().map(|v| 3.0 * v - 10.0).collect();

    let a = shapiro(&sample).expect("valid input");
    let b = shapiro(&shifted).expect("valid input");

    assert!(
        (a.statistic - b.statistic).abs() < 1e-6,
        "FALSIFIED NORM-004: W changed under affine map ({} vs {})",
        a.statistic,
        b.statistic
    );
    assert!(
        (a.pvalue - b.pvalue).abs() < 1e-6,
        "FALSIFIED NORM-004: p changed under affine map ({} vs {})",
        a.pvalue,
        b.pvalue
    );
}
