pub(crate) use super::*;
use crate::data::{Column, Dataset};

fn crosstab_of(x: &[&str], y: &[&str]) -> ContingencyTable {
    let ds = Dataset::new(vec![
        ("x".to_string(), Column::from_strs(x)),
        ("y".to_string(), Column::from_strs(y)),
    ])
    .unwrap();
    ds.crosstab("x", "y").unwrap()
}

#[test]
fn test_ttest_ind_pooled_reference() {
    let group1 = vec![2.3, 2.5, 2.7, 2.9, 3.1];
    let group2 = vec![3.2, 3.4, 3.6, 3.8, 4.0];

    let result = ttest_ind(&group1, &group2, true).unwrap();
    // Hand-computed: pooled var 0.1, se 0.2, t = -0.9 / 0.2 = -4.5, df 8
    assert!((result.statistic + 4.5).abs() < 1e-4);
    assert!((result.df - 8.0).abs() < 1e-6);
    assert!(result.pvalue < 0.01);
}

#[test]
fn test_ttest_ind_antisymmetric() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![2.0, 3.0, 4.0, 6.0];

    let ab = ttest_ind(&a, &b, true).unwrap();
    let ba = ttest_ind(&b, &a, true).unwrap();
    assert!((ab.statistic + ba.statistic).abs() < 1e-6);
    assert!((ab.pvalue - ba.pvalue).abs() < 1e-6);
}

#[test]
fn test_ttest_ind_equal_means() {
    let a = vec![1.0, 2.0, 3.0];
    let result = ttest_ind(&a, &a, true).unwrap();
    assert!(result.statistic.abs() < 1e-6);
    assert!((result.pvalue - 1.0).abs() < 1e-6);
}

#[test]
fn test_ttest_ind_welch_unequal_variances() {
    let small_var = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let large_var = vec![10.0, 20.0, 30.0, 40.0, 50.0];

    let welch = ttest_ind(&small_var, &large_var, false).unwrap();
    let pooled = ttest_ind(&small_var, &large_var, true).unwrap();

    // Welch-Satterthwaite df shrinks toward the noisier group
    assert!(welch.df < pooled.df);
    assert!(welch.df > 4.0 && welch.df < 4.2);
    assert!(welch.pvalue < 0.05);
}

#[test]
fn test_ttest_ind_too_few_observations() {
    assert!(ttest_ind(&[1.0], &[1.0, 2.0], true).is_err());
    assert!(ttest_ind(&[1.0, 2.0], &[1.0], true).is_err());
}

#[test]
fn test_ttest_ind_zero_variance() {
    let result = ttest_ind(&[2.0, 2.0, 2.0], &[3.0, 3.0, 3.0], true);
    assert!(result.is_err());
}

#[test]
fn test_f_oneway_reference() {
    let groups = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0], vec![3.0, 4.0, 5.0]];
    let result = f_oneway(&groups).unwrap();

    // SSB = 6, SSW = 6, F = (6/2) / (6/6) = 3; F(2,6) sf(3) = 2^-3 = 0.125
    assert!((result.statistic - 3.0).abs() < 1e-5);
    assert_eq!(result.df_between, 2);
    assert_eq!(result.df_within, 6);
    assert!((result.pvalue - 0.125).abs() < 1e-5);
}

#[test]
fn test_f_oneway_matches_squared_t_for_two_groups() {
    let a = vec![2.1, 2.9, 3.2, 3.8];
    let b = vec![4.0, 4.4, 5.1, 5.6];

    let t = ttest_ind(&a, &b, true).unwrap();
    let f = f_oneway(&[a, b]).unwrap();

    assert!((f.statistic - t.statistic * t.statistic).abs() < 1e-3);
    assert!((f.pvalue - t.pvalue).abs() < 1e-4);
}

#[test]
fn test_f_oneway_guards() {
    assert!(f_oneway(&[vec![1.0, 2.0]]).is_err());
    assert!(f_oneway(&[vec![1.0], vec![]]).is_err());
    // One observation per group leaves no residual degrees of freedom
    assert!(f_oneway(&[vec![1.0], vec![2.0]]).is_err());
    // Constant groups have zero within-group variance
    assert!(f_oneway(&[vec![1.0, 1.0], vec![2.0, 2.0]]).is_err());
}

#[test]
fn test_chi2_independence_2x2_yates_reference() {
    let x: Vec<&str> = std::iter::repeat("a")
        .take(30)
        .chain(std::iter::repeat("b").take(30))
        .collect();
    let y: Vec<&str> = std::iter::repeat("u")
        .take(10)
        .chain(std::iter::repeat("v").take(20))
        .chain(std::iter::repeat("u").take(20))
        .chain(std::iter::repeat("v").take(10))
        .collect();
    let table = crosstab_of(&x, &y);
    assert_eq!(table.counts(), &[vec![10, 20], vec![20, 10]]);

    let result = chi2_independence(&table).unwrap();
    // With continuity correction: 4 * (4.5^2 / 15) = 5.4
    assert!((result.statistic - 5.4).abs() < 1e-4);
    assert_eq!(result.df, 1);
    assert!((result.pvalue - 0.0201).abs() < 1e-3);
}

#[test]
fn test_chi2_independence_no_correction_above_2x2() {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (count, (xv, yv)) in [
        (10, ("a", "u")),
        (20, ("a", "v")),
        (30, ("a", "w")),
        (30, ("b", "u")),
        (20, ("b", "v")),
        (10, ("b", "w")),
    ] {
        for _ in 0..count {
            x.push(xv);
            y.push(yv);
        }
    }
    let table = crosstab_of(&x, &y);

    let result = chi2_independence(&table).unwrap();
    // Expected 20 per cell; chi2 = 4 * 100/20 = 20; sf(20, df=2) = e^-10
    assert!((result.statistic - 20.0).abs() < 1e-4);
    assert_eq!(result.df, 2);
    assert!((result.pvalue - 4.54e-5).abs() < 1e-6);
}

#[test]
fn test_chi2_independence_uniform_table() {
    let x: Vec<&str> = ["a", "a", "b", "b"].repeat(25);
    let y: Vec<&str> = ["u", "v", "u", "v"].repeat(25);
    let table = crosstab_of(&x, &y);

    let result = chi2_independence(&table).unwrap();
    assert!(result.statistic.abs() < 1e-6);
    assert!((result.pvalue - 1.0).abs() < 1e-6);
}

#[test]
fn test_chi2_independence_requires_2x2() {
    let table = crosstab_of(&["a", "a", "a"], &["u", "v", "u"]);
    assert!(chi2_independence(&table).is_err());
}

#[test]
fn test_chi2_independence_empty_marginal() {
    // Level "c" only co-occurs with a missing y, leaving an all-zero row.
    let ds = Dataset::new(vec![
        (
            "x".to_string(),
            Column::from_strs(&["a", "a", "b", "b", "c"]),
        ),
        (
            "y".to_string(),
            Column::from_opt_strs(&[Some("u"), Some("v"), Some("u"), Some("v"), None]),
        ),
    ])
    .unwrap();
    let table = ds.crosstab("x", "y").unwrap();

    assert!(chi2_independence(&table).is_err());
}

#[test]
fn test_pearsonr_reference() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 1.0, 4.0, 3.0, 6.0];

    let result = pearsonr(&x, &y).unwrap();
    // r = 10 / sqrt(10 * 14.8) = 0.82199, t = 2.5 on 3 df
    assert!((result.statistic - 0.822).abs() < 1e-3);
    assert!((result.pvalue - 0.0878).abs() < 2e-3);
    assert_eq!(result.df, 3);
}

#[test]
fn test_pearsonr_perfect_correlation() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y = vec![2.0, 4.0, 6.0, 8.0];

    let result = pearsonr(&x, &y).unwrap();
    assert!((result.statistic - 1.0).abs() < 1e-6);
    assert!(result.pvalue < 1e-9);

    let neg: Vec<f32> = y.iter().map(|v| -v).collect();
    let result = pearsonr(&x, &neg).unwrap();
    assert!((result.statistic + 1.0).abs() < 1e-6);
}

#[test]
fn test_pearsonr_guards() {
    assert!(pearsonr(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    assert!(pearsonr(&[1.0, 2.0], &[1.0, 2.0]).is_err());
    assert!(pearsonr(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn test_spearmanr_monotone_nonlinear() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![1.0, 4.0, 9.0, 16.0, 25.0];

    let result = spearmanr(&x, &y).unwrap();
    assert!((result.statistic - 1.0).abs() < 1e-6);
    assert!(result.pvalue < 1e-9);
}

#[test]
fn test_spearmanr_with_ties_reference() {
    let x = vec![1.0, 2.0, 2.0, 4.0];
    let y = vec![1.0, 2.0, 3.0, 4.0];

    let result = spearmanr(&x, &y).unwrap();
    // Ranks [1, 2.5, 2.5, 4] vs [1, 2, 3, 4]: rho = 4.5 / sqrt(4.5 * 5)
    assert!((result.statistic - 0.9487).abs() < 1e-3);
}

#[test]
fn test_spearmanr_reversed() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![50.0, 40.0, 30.0, 20.0, 10.0];

    let result = spearmanr(&x, &y).unwrap();
    assert!((result.statistic + 1.0).abs() < 1e-6);
}

#[test]
fn test_average_ranks_no_ties() {
    assert_eq!(average_ranks(&[10.0, 20.0, 30.0]), vec![1.0, 2.0, 3.0]);
    assert_eq!(average_ranks(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_average_ranks_ties_share_mean_rank() {
    assert_eq!(average_ranks(&[10.0, 10.0, 20.0]), vec![1.5, 1.5, 3.0]);
    assert_eq!(average_ranks(&[5.0, 5.0, 5.0]), vec![2.0, 2.0, 2.0]);
}
