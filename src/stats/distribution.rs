//! Tail-probability helpers over `statrs` distributions.
//!
//! Statistics are accumulated in f64 and clamped into [0, 1] before being
//! narrowed to f32 at the public API boundary.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

use crate::error::{ContrastarError, Result};

fn unit_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("unit normal parameters are valid")
}

/// Two-tailed p-value for a Student's t statistic with `df` degrees of freedom.
pub(crate) fn t_two_tailed(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        ContrastarError::precondition(format!("invalid t distribution (df={df}): {e}"))
    })?;
    Ok((2.0 * dist.cdf(-t.abs())).clamp(0.0, 1.0))
}

/// Upper-tail p-value for a chi-squared statistic with `df` degrees of freedom.
pub(crate) fn chi_squared_sf(x: f64, df: f64) -> Result<f64> {
    let dist = ChiSquared::new(df).map_err(|e| {
        ContrastarError::precondition(format!("invalid chi-squared distribution (df={df}): {e}"))
    })?;
    Ok(dist.sf(x).clamp(0.0, 1.0))
}

/// Upper-tail p-value for an F statistic with (`df1`, `df2`) degrees of freedom.
pub(crate) fn f_sf(x: f64, df1: f64, df2: f64) -> Result<f64> {
    let dist = FisherSnedecor::new(df1, df2).map_err(|e| {
        ContrastarError::precondition(format!(
            "invalid F distribution (df1={df1}, df2={df2}): {e}"
        ))
    })?;
    Ok(dist.sf(x).clamp(0.0, 1.0))
}

/// Upper-tail probability of the standard normal.
pub(crate) fn normal_sf(z: f64) -> f64 {
    unit_normal().sf(z).clamp(0.0, 1.0)
}

/// Standard normal quantile function. `p` must lie strictly inside (0, 1).
pub(crate) fn normal_quantile(p: f64) -> f64 {
    unit_normal().inverse_cdf(p)
}
