//! Test execution and the typed result report.
//!
//! [`run_test`] turns a suggested test plus two column names into a
//! [`TestReport`]. Each report variant keeps the full typed result from the
//! statistics layer; [`TestReport::entries`] flattens it to the labelled
//! numbers shown to the user, and serialization follows that same shape.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use crate::data::Dataset;
use crate::error::{ContrastarError, Result};
use crate::stats::{
    chi2_independence, f_oneway, pearsonr, shapiro, spearmanr, ttest_ind, AnovaResult,
    ChiSquareResult, CorrelationResult, TTestResult, SIGNIFICANCE_LEVEL,
};
use crate::suggest::TestKind;

/// Which correlation coefficient was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrelationMethod {
    /// Both columns passed the normality gate.
    Pearson,

    /// Rank-based fallback when either column looks non-normal.
    Spearman,
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pearson => write!(f, "Pearson"),
            Self::Spearman => write!(f, "Spearman"),
        }
    }
}

/// Outcome of one test run.
///
/// `Empty` is the report for [`TestKind::Unknown`]: running it is not an
/// error, it just produces no numbers.
#[derive(Debug, Clone)]
pub enum TestReport {
    TTest(TTestResult),
    Anova(AnovaResult),
    ChiSquare(ChiSquareResult),
    Correlation {
        result: CorrelationResult,
        method: CorrelationMethod,
    },
    Empty,
}

impl TestReport {
    /// The p-value of the run, if the report has one.
    #[must_use]
    pub fn p_value(&self) -> Option<f32> {
        match self {
            Self::TTest(r) => Some(r.pvalue),
            Self::Anova(r) => Some(r.pvalue),
            Self::ChiSquare(r) => Some(r.pvalue),
            Self::Correlation { result, .. } => Some(result.pvalue),
            Self::Empty => None,
        }
    }

    /// Labelled numbers in display order: the test statistic under its
    /// conventional name, then `"p-value"`. Empty reports have no entries.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, f32)> {
        match self {
            Self::TTest(r) => vec![("t-statistic", r.statistic), ("p-value", r.pvalue)],
            Self::Anova(r) => vec![("F-statistic", r.statistic), ("p-value", r.pvalue)],
            Self::ChiSquare(r) => vec![("Chi²", r.statistic), ("p-value", r.pvalue)],
            Self::Correlation { result, .. } => {
                vec![("Correlation", result.statistic), ("p-value", result.pvalue)]
            }
            Self::Empty => Vec::new(),
        }
    }

    /// The correlation method, for correlation reports only.
    #[must_use]
    pub fn method(&self) -> Option<CorrelationMethod> {
        match self {
            Self::Correlation { method, .. } => Some(*method),
            _ => None,
        }
    }

    /// Serializes the report to a pretty-printed JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for TestReport {
    /// A flat object mirroring [`TestReport::entries`], plus a `"method"`
    /// string for correlation reports. Key order follows display order.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();
        let extra = usize::from(self.method().is_some());
        let mut map = serializer.serialize_map(Some(entries.len() + extra))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        if let Some(method) = self.method() {
            map.serialize_entry("method", &method.to_string())?;
        }
        map.end()
    }
}

/// Runs `test` on columns `x` and `y` of `data`.
///
/// Group tests drop rows where either column is missing within each group;
/// correlation keeps only rows where both columns are present. The t-test
/// compares the first two groups in order of appearance and pools variances;
/// ANOVA takes all groups in sorted order.
///
/// # Arguments
///
/// * `data` - The dataset holding both columns
/// * `x` - Measured/outcome column name
/// * `y` - Grouping/second column name
/// * `test` - Which test to run
///
/// # Returns
///
/// The typed report, or [`TestReport::Empty`] for [`TestKind::Unknown`].
///
/// # Errors
///
/// Returns an error if a column is missing, a column has the wrong type for
/// the test, or too little data survives filtering.
pub fn run_test(data: &Dataset, x: &str, y: &str, test: TestKind) -> Result<TestReport> {
    match test {
        TestKind::TTest => {
            let groups = data.numeric_by_group(x, y, false)?;
            if groups.len() < 2 {
                return Err(ContrastarError::precondition(format!(
                    "t-test needs two groups in '{y}', found {}",
                    groups.len()
                )));
            }
            let result = ttest_ind(&groups[0].1, &groups[1].1, true)?;
            Ok(TestReport::TTest(result))
        }
        TestKind::Anova => {
            let groups = data.numeric_by_group(x, y, true)?;
            let samples: Vec<Vec<f32>> = groups.into_iter().map(|(_, values)| values).collect();
            Ok(TestReport::Anova(f_oneway(&samples)?))
        }
        TestKind::ChiSquare => {
            let table = data.crosstab(x, y)?;
            Ok(TestReport::ChiSquare(chi2_independence(&table)?))
        }
        TestKind::Correlation => {
            let (xs, ys) = data.paired_numeric(x, y)?;
            let method = pick_correlation_method(&xs, &ys);
            let result = match method {
                CorrelationMethod::Pearson => pearsonr(&xs, &ys)?,
                CorrelationMethod::Spearman => spearmanr(&xs, &ys)?,
            };
            Ok(TestReport::Correlation { result, method })
        }
        TestKind::Unknown => Ok(TestReport::Empty),
    }
}

/// Pearson when both sides pass Shapiro-Wilk, Spearman otherwise. A sample
/// the normality test cannot handle counts as non-normal.
fn pick_correlation_method(xs: &[f32], ys: &[f32]) -> CorrelationMethod {
    let both_normal = match (shapiro(xs), shapiro(ys)) {
        (Ok(a), Ok(b)) => a.pvalue > SIGNIFICANCE_LEVEL && b.pvalue > SIGNIFICANCE_LEVEL,
        _ => false,
    };
    if both_normal {
        CorrelationMethod::Pearson
    } else {
        CorrelationMethod::Spearman
    }
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
