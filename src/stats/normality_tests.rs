pub(crate) use super::*;

#[test]
fn test_shapiro_evenly_spaced_looks_normal() {
    let sample: Vec<f32> = (1..=10).map(|i| i as f32).collect();
    let result = shapiro(&sample).unwrap();

    // scipy.stats.shapiro reports W = 0.9703, p = 0.8924 for 1..=10
    assert!(result.statistic > 0.96 && result.statistic < 0.98);
    assert!(result.pvalue > 0.5);
}

#[test]
fn test_shapiro_n3_symmetric_sample() {
    let result = shapiro(&[1.0, 2.0, 3.0]).unwrap();
    assert!((result.statistic - 1.0).abs() < 1e-6);
    assert!((result.pvalue - 1.0).abs() < 1e-6);
}

#[test]
fn test_shapiro_n3_outlier() {
    let result = shapiro(&[1.0, 2.0, 100.0]).unwrap();
    // Closed form for n = 3: W = 0.5 * (x3 - x1)^2 / sum of squares
    assert!((result.statistic - 0.7576).abs() < 1e-3);
    assert!((result.pvalue - 0.0160).abs() < 2e-3);
}

#[test]
fn test_shapiro_rejects_exponential_growth() {
    let fib = vec![1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
    let result = shapiro(&fib).unwrap();
    assert!(result.statistic < 0.9);
    assert!(result.pvalue < 0.05);
}

#[test]
fn test_shapiro_small_n_branch() {
    // 4 <= n <= 11 uses the log-normal fit of 1 - W
    let result = shapiro(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(result.pvalue > 0.5);
}

#[test]
fn test_shapiro_large_n_branch() {
    // n >= 12 uses the normal fit of ln(1 - W)
    let sample: Vec<f32> = (1..=20).map(|i| i as f32).collect();
    let result = shapiro(&sample).unwrap();
    assert!(result.pvalue > 0.05);
}

#[test]
fn test_shapiro_order_independent() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let shuffled = vec![4.0, 1.0, 7.0, 3.0, 6.0, 2.0, 5.0];

    let a = shapiro(&sorted).unwrap();
    let b = shapiro(&shuffled).unwrap();
    assert!((a.statistic - b.statistic).abs() < 1e-9);
    assert!((a.pvalue - b.pvalue).abs() < 1e-9);
}

#[test]
fn test_shapiro_too_few_observations() {
    assert!(shapiro(&[]).is_err());
    assert!(shapiro(&[1.0]).is_err());
    assert!(shapiro(&[1.0, 2.0]).is_err());
}

#[test]
fn test_shapiro_too_many_observations() {
    let sample: Vec<f32> = (0..=SHAPIRO_MAX_N).map(|i| i as f32).collect();
    assert!(shapiro(&sample).is_err());
}

#[test]
fn test_shapiro_zero_range() {
    let result = shapiro(&[4.0, 4.0, 4.0, 4.0]);
    assert!(result.is_err());
}
