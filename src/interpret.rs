//! Plain-language interpretation of a test report.

use crate::analyze::TestReport;
use crate::stats::SIGNIFICANCE_LEVEL;
use crate::suggest::TestKind;

/// Renders the one-sentence conclusion for a finished run.
///
/// The sentence always has the same shape: the test label, the p-value to
/// four decimal places, and whether it clears the 0.05 significance level.
/// A report without a p-value reads as p = 1, so an unknown test is always
/// reported as not significant.
///
/// # Example
///
/// ```
/// use contrastar::analyze::TestReport;
/// use contrastar::interpret::interpret;
/// use contrastar::suggest::TestKind;
///
/// let sentence = interpret(TestKind::Unknown, &TestReport::Empty);
/// assert_eq!(
///     sentence,
///     "The Unknown yielded a p-value of 1.0000, which is not statistically significant."
/// );
/// ```
#[must_use]
pub fn interpret(test: TestKind, report: &TestReport) -> String {
    let p = report.p_value().unwrap_or(1.0);
    let significance = if p < SIGNIFICANCE_LEVEL {
        "statistically significant"
    } else {
        "not statistically significant"
    };
    format!("The {test} yielded a p-value of {p:.4}, which is {significance}.")
}

#[cfg(test)]
#[path = "interpret_tests.rs"]
mod tests;
