//! Statistical Hypothesis Testing
//!
//! Implements the classical tests behind the guided workflow.
//!
//! # Tests
//!
//! - **t-test**: Compare two group means (pooled or Welch)
//! - **ANOVA**: Compare multiple group means (one-way F-test)
//! - **chi-square**: Test independence on a contingency table
//! - **correlation**: Pearson and Spearman association tests
//!
//! # Example
//!
//! ```
//! use contrastar::stats::hypothesis::ttest_ind;
//!
//! let group1 = vec![2.3, 2.5, 2.7, 2.9, 3.1];
//! let group2 = vec![3.2, 3.4, 3.6, 3.8, 4.0];
//!
//! let result = ttest_ind(&group1, &group2, true).expect("valid t-test inputs");
//! assert!(result.pvalue < 0.05);
//! ```

use crate::data::ContingencyTable;
use crate::error::{ContrastarError, Result};
use crate::stats::distribution;

/// Result of a t-test.
#[derive(Debug, Clone)]
pub struct TTestResult {
    /// t-statistic
    pub statistic: f32,

    /// p-value (two-tailed)
    pub pvalue: f32,

    /// Degrees of freedom
    pub df: f32,
}

/// Result of a chi-square independence test.
#[derive(Debug, Clone)]
pub struct ChiSquareResult {
    /// Chi-square statistic
    pub statistic: f32,

    /// p-value
    pub pvalue: f32,

    /// Degrees of freedom
    pub df: usize,
}

/// Result of an ANOVA F-test.
#[derive(Debug, Clone)]
pub struct AnovaResult {
    /// F-statistic
    pub statistic: f32,

    /// p-value
    pub pvalue: f32,

    /// Between-groups degrees of freedom
    pub df_between: usize,

    /// Within-groups degrees of freedom
    pub df_within: usize,
}

/// Result of a correlation test.
#[derive(Debug, Clone)]
pub struct CorrelationResult {
    /// Correlation coefficient in [-1, 1]
    pub statistic: f32,

    /// p-value (two-tailed)
    pub pvalue: f32,

    /// Degrees of freedom of the t transform (n - 2)
    pub df: usize,
}

fn mean_f64(sample: &[f32]) -> f64 {
    sample.iter().map(|&v| f64::from(v)).sum::<f64>() / sample.len() as f64
}

fn sample_variance_f64(sample: &[f32], mean: f64) -> f64 {
    sample
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / (sample.len() - 1) as f64
}

/// Independent two-sample t-test: Tests if two independent samples have different means.
///
/// H₀: μ₁ = μ₂
/// H₁: μ₁ ≠ μ₂
///
/// # Arguments
///
/// * `sample1` - First sample
/// * `sample2` - Second sample
/// * `equal_var` - Assume equal variances (pooled t-test) or not (Welch's t-test)
///
/// # Returns
///
/// `TTestResult` with statistic, p-value, and degrees of freedom
///
/// # Errors
///
/// Returns a precondition error when a group has fewer than 2 observations or
/// all observations are identical.
pub fn ttest_ind(sample1: &[f32], sample2: &[f32], equal_var: bool) -> Result<TTestResult> {
    let n1 = sample1.len();
    let n2 = sample2.len();

    if n1 < 2 || n2 < 2 {
        return Err(ContrastarError::precondition(
            "t-test requires at least 2 observations per group",
        ));
    }

    let mean1 = mean_f64(sample1);
    let mean2 = mean_f64(sample2);
    let var1 = sample_variance_f64(sample1, mean1);
    let var2 = sample_variance_f64(sample2, mean2);

    let (t_stat, df) = if equal_var {
        // Pooled t-test (Student's t-test)
        let pooled_var =
            ((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2) / (n1 + n2 - 2) as f64;
        if pooled_var <= 0.0 {
            return Err(ContrastarError::precondition(
                "t-test is undefined when both groups have zero variance",
            ));
        }
        let se = (pooled_var * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();
        let t = (mean1 - mean2) / se;
        (t, (n1 + n2 - 2) as f64)
    } else {
        // Welch's t-test (unequal variances)
        let sq = var1 / n1 as f64 + var2 / n2 as f64;
        if sq <= 0.0 {
            return Err(ContrastarError::precondition(
                "t-test is undefined when both groups have zero variance",
            ));
        }
        let t = (mean1 - mean2) / sq.sqrt();

        // Welch-Satterthwaite degrees of freedom
        let denominator = (var1 / n1 as f64).powi(2) / (n1 - 1) as f64
            + (var2 / n2 as f64).powi(2) / (n2 - 1) as f64;
        (t, sq.powi(2) / denominator)
    };

    let pvalue = distribution::t_two_tailed(t_stat, df)?;

    Ok(TTestResult {
        statistic: t_stat as f32,
        pvalue: pvalue as f32,
        df: df as f32,
    })
}

/// One-way ANOVA: Tests if multiple groups have the same mean.
///
/// H₀: μ₁ = μ₂ = ... = μₖ
/// H₁: At least one mean is different
///
/// # Arguments
///
/// * `groups` - One sample per group
///
/// # Returns
///
/// `AnovaResult` with F-statistic, p-value, and degrees of freedom
///
/// # Errors
///
/// Returns a precondition error for fewer than 2 groups, an empty group, no
/// residual degrees of freedom, or zero within-group variance.
pub fn f_oneway(groups: &[Vec<f32>]) -> Result<AnovaResult> {
    let k = groups.len();
    if k < 2 {
        return Err(ContrastarError::precondition(
            "ANOVA requires at least 2 groups",
        ));
    }

    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(ContrastarError::precondition(format!(
                "ANOVA group {i} is empty; all groups need at least 1 observation"
            )));
        }
    }

    let group_means: Vec<f64> = groups.iter().map(|g| mean_f64(g)).collect();

    let n_total: usize = groups.iter().map(Vec::len).sum();
    let grand_sum: f64 = groups
        .iter()
        .flat_map(|g| g.iter())
        .map(|&v| f64::from(v))
        .sum();
    let grand_mean = grand_sum / n_total as f64;

    // Between-group sum of squares: SSB = Σ n_i * (ȳ_i - ȳ)²
    let ss_between: f64 = groups
        .iter()
        .zip(group_means.iter())
        .map(|(group, &mean)| group.len() as f64 * (mean - grand_mean).powi(2))
        .sum();

    // Within-group sum of squares: SSW = Σ Σ (y_ij - ȳ_i)²
    let ss_within: f64 = groups
        .iter()
        .zip(group_means.iter())
        .map(|(group, &mean)| {
            group
                .iter()
                .map(|&val| (f64::from(val) - mean).powi(2))
                .sum::<f64>()
        })
        .sum();

    let df_between = k - 1;
    let df_within = n_total - k;

    if df_within == 0 {
        return Err(ContrastarError::precondition(
            "ANOVA requires more observations than groups",
        ));
    }

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;

    if ms_within <= 0.0 {
        return Err(ContrastarError::precondition(
            "ANOVA is undefined when within-group variance is zero",
        ));
    }

    let f_stat = ms_between / ms_within;
    let pvalue = distribution::f_sf(f_stat, df_between as f64, df_within as f64)?;

    Ok(AnovaResult {
        statistic: f_stat as f32,
        pvalue: pvalue as f32,
        df_between,
        df_within,
    })
}

/// Chi-square independence test on a contingency table.
///
/// H₀: The two categorical variables are independent
/// H₁: The variables are associated
///
/// Applies the Yates continuity correction on 2x2 tables (df == 1).
///
/// # Arguments
///
/// * `table` - Cross-tabulated counts
///
/// # Returns
///
/// `ChiSquareResult` with statistic, p-value, and degrees of freedom
///
/// # Errors
///
/// Returns a precondition error for tables smaller than 2x2, empty tables,
/// or tables with an all-zero row or column.
pub fn chi2_independence(table: &ContingencyTable) -> Result<ChiSquareResult> {
    let (rows, cols) = table.shape();
    if rows < 2 || cols < 2 {
        return Err(ContrastarError::precondition(
            "chi-square independence requires at least a 2x2 table",
        ));
    }

    let counts = table.counts();
    let total = table.total() as f64;
    if total <= 0.0 {
        return Err(ContrastarError::precondition(
            "contingency table has no observations",
        ));
    }

    let row_sums: Vec<f64> = counts
        .iter()
        .map(|row| row.iter().sum::<u64>() as f64)
        .collect();
    let col_sums: Vec<f64> = (0..cols)
        .map(|c| counts.iter().map(|row| row[c]).sum::<u64>() as f64)
        .collect();

    if row_sums.iter().any(|&s| s <= 0.0) || col_sums.iter().any(|&s| s <= 0.0) {
        return Err(ContrastarError::precondition(
            "contingency table has an all-zero row or column",
        ));
    }

    let df = (rows - 1) * (cols - 1);
    let yates = df == 1;

    // χ² = Σ (O - E)² / E with E = row_total * col_total / N
    let mut stat = 0.0_f64;
    for r in 0..rows {
        for c in 0..cols {
            let observed = counts[r][c] as f64;
            let expected = row_sums[r] * col_sums[c] / total;
            let diff = if yates {
                ((observed - expected).abs() - 0.5).max(0.0)
            } else {
                (observed - expected).abs()
            };
            stat += diff * diff / expected;
        }
    }

    let pvalue = distribution::chi_squared_sf(stat, df as f64)?;

    Ok(ChiSquareResult {
        statistic: stat as f32,
        pvalue: pvalue as f32,
        df,
    })
}

/// Pearson product-moment correlation with a two-tailed significance test.
///
/// H₀: ρ = 0
/// H₁: ρ ≠ 0
///
/// The p-value uses the exact t transform t = r·√((n-2)/(1-r²)).
///
/// # Arguments
///
/// * `x` - First variable
/// * `y` - Second variable, paired with `x`
///
/// # Returns
///
/// `CorrelationResult` with coefficient, p-value, and degrees of freedom
///
/// # Errors
///
/// Returns a precondition error for unpaired lengths, fewer than 3 pairs, or
/// zero variance on either side.
pub fn pearsonr(x: &[f32], y: &[f32]) -> Result<CorrelationResult> {
    if x.len() != y.len() {
        return Err(ContrastarError::DimensionMismatch {
            expected: format!("{} paired observations", x.len()),
            actual: format!("{}", y.len()),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(ContrastarError::precondition(
            "correlation requires at least 3 paired observations",
        ));
    }

    let mx = mean_f64(x);
    let my = mean_f64(y);

    let mut cov = 0.0_f64;
    let mut vx = 0.0_f64;
    let mut vy = 0.0_f64;
    for i in 0..n {
        let dx = f64::from(x[i]) - mx;
        let dy = f64::from(y[i]) - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }

    if vx <= 0.0 || vy <= 0.0 {
        return Err(ContrastarError::precondition(
            "correlation is undefined for zero-variance input",
        ));
    }

    let r = (cov / (vx * vy).sqrt()).clamp(-1.0, 1.0);
    let df = n - 2;

    // Perfect correlation has no residual variance for the t transform.
    let pvalue = if 1.0 - r * r < 1e-12 {
        0.0
    } else {
        let t = r * (df as f64 / (1.0 - r * r)).sqrt();
        distribution::t_two_tailed(t, df as f64)?
    };

    Ok(CorrelationResult {
        statistic: r as f32,
        pvalue: pvalue as f32,
        df,
    })
}

/// Spearman rank correlation with a two-tailed significance test.
///
/// Computes Pearson correlation on average ranks (ties share their mean
/// rank), with the same t-transform p-value as [`pearsonr`].
///
/// # Arguments
///
/// * `x` - First variable
/// * `y` - Second variable, paired with `x`
///
/// # Returns
///
/// `CorrelationResult` with coefficient, p-value, and degrees of freedom
///
/// # Errors
///
/// Same precondition errors as [`pearsonr`]; a side where every value ties
/// has zero rank variance.
pub fn spearmanr(x: &[f32], y: &[f32]) -> Result<CorrelationResult> {
    if x.len() != y.len() {
        return Err(ContrastarError::DimensionMismatch {
            expected: format!("{} paired observations", x.len()),
            actual: format!("{}", y.len()),
        });
    }
    let rx = average_ranks(x);
    let ry = average_ranks(y);
    pearsonr(&rx, &ry)
}

/// Ranks values ascending from 1, assigning tied values their average rank.
fn average_ranks(values: &[f32]) -> Vec<f32> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0_f32; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Positions i..=j (0-based) share the mean of ranks i+1..=j+1.
        let avg = (i + j) as f32 / 2.0 + 1.0;
        for k in i..=j {
            ranks[order[k]] = avg;
        }
        i = j + 1;
    }
    ranks
}

#[cfg(test)]
#[path = "hypothesis_tests.rs"]
mod hypothesis_tests;

#[cfg(test)]
#[path = "tests_hypothesis_contract.rs"]
mod tests_hypothesis_contract;
