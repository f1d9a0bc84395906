//! Pre-flight assumption checks for a suggested test.
//!
//! Every check is advisory. The checker inspects the selected columns and
//! reports anything that weakens the suggested test, but it never blocks the
//! run and never fails itself: a column that cannot be checked yields either
//! no warning or an explicit skip notice.

use crate::data::Dataset;
use crate::error::ContrastarError;
use crate::stats::{shapiro, SIGNIFICANCE_LEVEL};
use crate::suggest::TestKind;
use std::fmt;

/// Groups smaller than this trigger a small-group warning.
pub const MIN_GROUP_SIZE: usize = 5;

/// A single advisory raised by [`check_assumptions`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssumptionWarning {
    /// The named column contains missing entries.
    MissingValues { column: String, count: usize },

    /// The smallest group in the grouping column is below [`MIN_GROUP_SIZE`].
    SmallGroups { min_size: usize },

    /// Shapiro-Wilk rejected normality for the named column.
    NonNormal { column: String, p_value: f32 },

    /// The normality check could not run on the named column.
    NormalityCheckSkipped { column: String, reason: String },
}

impl fmt::Display for AssumptionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValues { column, count } => {
                write!(f, "Missing values detected in '{column}' ({count} rows).")
            }
            Self::SmallGroups { min_size } => {
                write!(
                    f,
                    "Small group sizes (smallest group has {min_size} observations)."
                )
            }
            Self::NonNormal { column, p_value } => {
                write!(
                    f,
                    "'{column}' may not be normally distributed (Shapiro-Wilk p = {p_value:.4})."
                )
            }
            Self::NormalityCheckSkipped { column, reason } => {
                write!(f, "Normality check for '{column}' skipped: {reason}.")
            }
        }
    }
}

/// Checks the assumptions of `test` on the selected columns.
///
/// Warnings come back in a fixed order: missing values for x, missing values
/// for y, then for T-test/ANOVA the group-size check on y and the normality
/// check on x. Other tests only get the missing-value checks. An unknown
/// column name contributes nothing.
///
/// # Arguments
///
/// * `data` - The dataset holding both columns
/// * `x` - Measured/outcome column name
/// * `y` - Grouping/second column name
/// * `test` - The suggested test whose assumptions apply
///
/// # Returns
///
/// All triggered warnings; empty when every check passed.
#[must_use]
pub fn check_assumptions(
    data: &Dataset,
    x: &str,
    y: &str,
    test: TestKind,
) -> Vec<AssumptionWarning> {
    let mut warnings = Vec::new();

    for name in [x, y] {
        if let Ok(column) = data.column(name) {
            let count = column.n_missing();
            if count > 0 {
                warnings.push(AssumptionWarning::MissingValues {
                    column: name.to_string(),
                    count,
                });
            }
        }
    }

    if !matches!(test, TestKind::TTest | TestKind::Anova) {
        return warnings;
    }

    if let Ok(groups) = data.column(y) {
        // Counts exclude missing entries, so an all-missing grouping column
        // has no smallest group and raises nothing here.
        if let Some(min_size) = groups.value_counts().iter().map(|(_, n)| *n).min() {
            if min_size < MIN_GROUP_SIZE {
                warnings.push(AssumptionWarning::SmallGroups { min_size });
            }
        }
    }

    if let Ok(column) = data.column(x) {
        if let Some(values) = column.numeric_values() {
            match shapiro(&values) {
                Ok(result) if result.pvalue < SIGNIFICANCE_LEVEL => {
                    warnings.push(AssumptionWarning::NonNormal {
                        column: x.to_string(),
                        p_value: result.pvalue,
                    });
                }
                Ok(_) => {}
                Err(err) => {
                    warnings.push(AssumptionWarning::NormalityCheckSkipped {
                        column: x.to_string(),
                        reason: skip_reason(&err),
                    });
                }
            }
        }
    }

    warnings
}

/// Strips the error-kind prefix so the advisory reads as plain prose.
fn skip_reason(err: &ContrastarError) -> String {
    match err {
        ContrastarError::Precondition { message } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "assumptions_tests.rs"]
mod tests;
