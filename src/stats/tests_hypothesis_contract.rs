// =========================================================================
// FALSIFY-HT: hypothesis testing contract (contrastar stats)
//
// Five-Whys:
//   Why 1: a wrong p-value silently flips the workflow's verdict sentence
//   Why 2: the verdict is the only output a non-statistician reads
//   Why 3: distribution tails are easy to get subtly wrong (one vs two)
//   Why 4: reference values from the literature pin the implementation
//   Why 5: textbook statistics is exactly where "obviously correct" hides
//
// References:
//   - Student (1908) "The Probable Error of a Mean"
//   - Fisher (1925) "Statistical Methods for Research Workers"
//   - Pearson (1900) "On the criterion that a given system of deviations..."
//   - Yates (1934) "Contingency tables involving small numbers"
//   - Spearman (1904) "The proof and measurement of association"
// =========================================================================

use super::*;
use crate::data::{Column, Dataset};

/// FALSIFY-HT-001: Two-sample t-test p-value is in [0, 1]
#[test]
fn falsify_ht_001_ttest_pvalue_bounded() {
    let group1 = vec![2.0, 2.5, 3.0, 3.5, 4.0];
    let group2 = vec![2.2, 2.6, 3.1, 3.4, 4.1];
    let result = ttest_ind(&group1, &group2, true).expect("valid input");

    assert!(
        (0.0..=1.0).contains(&result.pvalue),
        "FALSIFIED HT-001: p-value={} outside [0,1]",
        result.pvalue
    );
}

/// FALSIFY-HT-002: Two-sample t-test detects a clear mean difference
#[test]
fn falsify_ht_002_ttest_ind_detects_difference() {
    let group1 = vec![1.0, 1.1, 1.2, 0.9, 1.0, 1.1, 0.95, 1.05];
    let group2 = vec![5.0, 5.1, 5.2, 4.9, 5.0, 5.1, 4.95, 5.05];
    let result = ttest_ind(&group1, &group2, true).expect("valid input");

    assert!(
        result.pvalue < 0.05,
        "FALSIFIED HT-002: clear separation not flagged, p={}",
        result.pvalue
    );
}

/// FALSIFY-HT-003: Swapping the groups negates t and preserves p
#[test]
fn falsify_ht_003_ttest_ind_group_swap() {
    let a = vec![3.1, 2.8, 3.4, 3.0, 2.9];
    let b = vec![3.9, 4.2, 3.7, 4.1, 4.0];
    let ab = ttest_ind(&a, &b, true).expect("valid input");
    let ba = ttest_ind(&b, &a, true).expect("valid input");

    assert!(
        (ab.statistic + ba.statistic).abs() < 1e-6,
        "FALSIFIED HT-003: t not antisymmetric ({} vs {})",
        ab.statistic,
        ba.statistic
    );
    assert!(
        (ab.pvalue - ba.pvalue).abs() < 1e-6,
        "FALSIFIED HT-003: p changed under swap ({} vs {})",
        ab.pvalue,
        ba.pvalue
    );
}

/// FALSIFY-HT-004: Identical samples give t = 0 and p = 1
#[test]
fn falsify_ht_004_ttest_ind_identical_samples() {
    let sample = vec![1.0, 2.0, 3.0, 4.0];
    let result = ttest_ind(&sample, &sample, true).expect("valid input");

    assert!(
        result.statistic.abs() < 1e-6 && (result.pvalue - 1.0).abs() < 1e-6,
        "FALSIFIED HT-004: t={}, p={}",
        result.statistic,
        result.pvalue
    );
}

/// FALSIFY-HT-005: One-way ANOVA reproduces the closed-form F(2,6) tail
#[test]
fn falsify_ht_005_anova_reference_value() {
    let groups = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0], vec![3.0, 4.0, 5.0]];
    let result = f_oneway(&groups).expect("valid input");

    // sf(F; 2, d2) = (1 + 2F/d2)^(-d2/2), so sf(3; 2, 6) = 0.125 exactly
    assert!(
        (result.statistic - 3.0).abs() < 1e-5 && (result.pvalue - 0.125).abs() < 1e-5,
        "FALSIFIED HT-005: F={}, p={}",
        result.statistic,
        result.pvalue
    );
}

/// FALSIFY-HT-006: Two-group ANOVA is the square of the pooled t-test
#[test]
fn falsify_ht_006_anova_equals_squared_t() {
    let a = vec![2.1, 2.9, 3.2, 3.8, 2.6];
    let b = vec![4.0, 4.4, 5.1, 5.6, 4.8];

    let t = ttest_ind(&a, &b, true).expect("valid input");
    let f = f_oneway(&[a, b]).expect("valid input");

    assert!(
        (f.statistic - t.statistic * t.statistic).abs() < 1e-3,
        "FALSIFIED HT-006: F={} vs t^2={}",
        f.statistic,
        t.statistic * t.statistic
    );
    assert!(
        (f.pvalue - t.pvalue).abs() < 1e-4,
        "FALSIFIED HT-006: p diverged ({} vs {})",
        f.pvalue,
        t.pvalue
    );
}

/// FALSIFY-HT-007: 2x2 chi-square applies the Yates continuity correction
#[test]
fn falsify_ht_007_chi2_yates_reference() {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (count, (xv, yv)) in [
        (10, ("a", "u")),
        (20, ("a", "v")),
        (20, ("b", "u")),
        (10, ("b", "v")),
    ] {
        for _ in 0..count {
            x.push(xv);
            y.push(yv);
        }
    }
    let ds = Dataset::new(vec![
        ("x".to_string(), Column::from_strs(&x)),
        ("y".to_string(), Column::from_strs(&y)),
    ])
    .expect("valid dataset");
    let table = ds.crosstab("x", "y").expect("valid columns");
    let result = chi2_independence(&table).expect("valid table");

    // Corrected cells: 4 * (|5| - 0.5)^2 / 15 = 5.4, p = 0.0201
    assert!(
        (result.statistic - 5.4).abs() < 1e-4,
        "FALSIFIED HT-007: chi2={} without continuity correction",
        result.statistic
    );
    assert!(
        (result.pvalue - 0.0201).abs() < 1e-3,
        "FALSIFIED HT-007: p={}",
        result.pvalue
    );
}

/// FALSIFY-HT-008: A perfectly balanced table is maximally independent
#[test]
fn falsify_ht_008_chi2_balanced_table() {
    let x: Vec<&str> = ["a", "a", "b", "b"].repeat(25);
    let y: Vec<&str> = ["u", "v", "u", "v"].repeat(25);
    let ds = Dataset::new(vec![
        ("x".to_string(), Column::from_strs(&x)),
        ("y".to_string(), Column::from_strs(&y)),
    ])
    .expect("valid dataset");
    let table = ds.crosstab("x", "y").expect("valid columns");
    let result = chi2_independence(&table).expect("valid table");

    assert!(
        result.statistic.abs() < 1e-6 && (result.pvalue - 1.0).abs() < 1e-6,
        "FALSIFIED HT-008: chi2={}, p={}",
        result.statistic,
        result.pvalue
    );
}

/// FALSIFY-HT-009: Pearson r matches the hand-computed reference
#[test]
fn falsify_ht_009_pearson_reference_value() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 1.0, 4.0, 3.0, 6.0];
    let result = pearsonr(&x, &y).expect("valid input");

    // r = 10 / sqrt(10 * 14.8), t = 2.5 on 3 df
    assert!(
        (result.statistic - 0.822).abs() < 1e-3,
        "FALSIFIED HT-009: r={}",
        result.statistic
    );
    assert!(
        (result.pvalue - 0.0878).abs() < 2e-3,
        "FALSIFIED HT-009: p={}",
        result.pvalue
    );
}

/// FALSIFY-HT-010: Spearman rho is invariant under monotone transforms
#[test]
fn falsify_ht_010_spearman_monotone_invariance() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![2.5, 1.0, 4.0, 3.5, 6.0, 5.0];
    let cubed: Vec<f32> = y.iter().map(|v| v * v * v).collect();

    let raw = spearmanr(&x, &y).expect("valid input");
    let transformed = spearmanr(&x, &cubed).expect("valid input");

    assert!(
        (raw.statistic - transformed.statistic).abs() < 1e-6,
        "FALSIFIED HT-010: rho changed under monotone transform ({} vs {})",
        raw.statistic,
        transformed.statistic
    );
}
