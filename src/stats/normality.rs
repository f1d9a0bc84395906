//! Shapiro-Wilk normality test.
//!
//! Implements Royston's AS R94 approximation of the Shapiro-Wilk W test,
//! valid for samples of 3 to 5000 observations. Order-statistic scores use
//! the Blom approximation m_i = Φ⁻¹((i - 0.375) / (n + 0.25)); the two most
//! extreme weights are polynomial-corrected per Royston (1995).
//!
//! # Example
//!
//! ```
//! use contrastar::stats::normality::shapiro;
//!
//! let symmetric = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let result = shapiro(&symmetric).expect("valid sample");
//! assert!(result.pvalue > 0.05);
//! ```

use crate::error::{ContrastarError, Result};
use crate::stats::distribution;

/// Largest sample size the AS R94 approximation is calibrated for.
pub const SHAPIRO_MAX_N: usize = 5000;

/// Result of a Shapiro-Wilk test.
#[derive(Debug, Clone)]
pub struct ShapiroResult {
    /// W statistic in (0, 1]; values near 1 look normal
    pub statistic: f32,

    /// p-value for H₀: the sample is drawn from a normal distribution
    pub pvalue: f32,
}

/// Shapiro-Wilk test for departure from normality.
///
/// H₀: The sample is drawn from a normal distribution
/// H₁: The sample is not normally distributed
///
/// # Arguments
///
/// * `sample` - Observations, order-independent
///
/// # Returns
///
/// `ShapiroResult` with the W statistic and p-value
///
/// # Errors
///
/// Returns a precondition error for fewer than 3 observations, more than
/// [`SHAPIRO_MAX_N`], or a zero-range sample.
pub fn shapiro(sample: &[f32]) -> Result<ShapiroResult> {
    let n = sample.len();
    if n < 3 {
        return Err(ContrastarError::precondition(
            "normality test requires at least 3 observations",
        ));
    }
    if n > SHAPIRO_MAX_N {
        return Err(ContrastarError::precondition(format!(
            "normality test supports at most {SHAPIRO_MAX_N} observations, got {n}"
        )));
    }

    let mut x: Vec<f64> = sample.iter().map(|&v| f64::from(v)).collect();
    x.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let range = x[n - 1] - x[0];
    if range <= 0.0 {
        return Err(ContrastarError::precondition(
            "normality test is undefined for a zero-range sample",
        ));
    }

    let w = w_statistic(&x);
    let pvalue = w_pvalue(w, n);

    Ok(ShapiroResult {
        statistic: w as f32,
        pvalue: pvalue as f32,
    })
}

/// W = (Σ aᵢ x₍ᵢ₎)² / Σ (xᵢ - x̄)² over the sorted sample.
fn w_statistic(x: &[f64]) -> f64 {
    let n = x.len();
    let a = coefficients(n);

    let mean = x.iter().sum::<f64>() / n as f64;
    let numerator: f64 = a.iter().zip(x.iter()).map(|(ai, xi)| ai * xi).sum();
    let denominator: f64 = x.iter().map(|xi| (xi - mean).powi(2)).sum();

    (numerator * numerator / denominator).clamp(0.0, 1.0)
}

/// Normalized order-statistic weights a₁..aₙ (antisymmetric, unit norm).
fn coefficients(n: usize) -> Vec<f64> {
    if n == 3 {
        let v = 0.5_f64.sqrt();
        return vec![-v, 0.0, v];
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (0..n)
        .map(|i| distribution::normal_quantile((i as f64 + 1.0 - 0.375) / an25))
        .collect();
    let summ2: f64 = m.iter().map(|mi| mi * mi).sum();
    let ssq = summ2.sqrt();
    let u = 1.0 / (n as f64).sqrt();

    // Royston (1995) polynomial corrections for the extreme weights.
    let a_n = m[n - 1] / ssq + u * (0.221_157
        + u * (-0.147_981 + u * (-2.071_190 + u * (4.434_685 + u * -2.706_056))));

    let mut a = vec![0.0_f64; n];
    a[n - 1] = a_n;
    a[0] = -a_n;

    if n <= 5 {
        let phi = (summ2 - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * a_n.powi(2));
        let fac = phi.sqrt();
        for i in 1..n - 1 {
            a[i] = m[i] / fac;
        }
    } else {
        let a_n1 = m[n - 2] / ssq + u * (0.042_981
            + u * (-0.293_762 + u * (-1.752_461 + u * (5.682_633 + u * -3.582_633))));
        a[n - 2] = a_n1;
        a[1] = -a_n1;

        let phi = (summ2 - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * a_n.powi(2) - 2.0 * a_n1.powi(2));
        let fac = phi.sqrt();
        for i in 2..n - 2 {
            a[i] = m[i] / fac;
        }
    }

    a
}

/// Royston's three p-value regimes: exact for n = 3, a log-normal fit of
/// 1 - W for 4 ≤ n ≤ 11, and a normal fit of ln(1 - W) for n ≥ 12.
fn w_pvalue(w: f64, n: usize) -> f64 {
    if 1.0 - w < 1e-12 {
        return 1.0;
    }

    if n == 3 {
        let pi6 = 6.0 / std::f64::consts::PI;
        let stqr = 0.75_f64.sqrt().asin();
        return (pi6 * (w.sqrt().asin() - stqr)).clamp(0.0, 1.0);
    }

    let y = (1.0 - w).ln();
    let nf = n as f64;

    let z = if n <= 11 {
        let gamma = -2.273 + 0.459 * nf;
        if y >= gamma {
            // Beyond the fitted region; W this small cannot look normal.
            return 1e-19;
        }
        let adj = -(gamma - y).ln();
        let mu = 0.544 + nf * (-0.399_78 + nf * (0.025_054 + nf * -6.714e-4));
        let sigma = (1.3822 + nf * (-0.778_57 + nf * (0.062_767 + nf * -0.002_032_2))).exp();
        (adj - mu) / sigma
    } else {
        let ln_n = nf.ln();
        let mu = -1.5861 + ln_n * (-0.310_82 + ln_n * (-0.083_751 + ln_n * 0.003_891_5));
        let sigma = (-0.4803 + ln_n * (-0.082_676 + ln_n * 0.003_030_2)).exp();
        (y - mu) / sigma
    };

    distribution::normal_sf(z)
}

#[cfg(test)]
#[path = "normality_tests.rs"]
mod normality_tests;

#[cfg(test)]
#[path = "tests_normality_contract.rs"]
mod tests_normality_contract;
