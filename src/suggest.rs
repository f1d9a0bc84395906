//! Test selection from classified variable types.
//!
//! A pure lookup over the (x type, y type, y level count) triple. X is the
//! measured/outcome variable, Y the grouping/second variable. Both
//! categorical kinds drive group-based tests uniformly, so a numeric group
//! code (1/2) suggests the same test as a text label ("a"/"b").

use std::fmt;

use crate::classify::VariableType;

/// The five canonical test selections.
///
/// Chosen once per (x, y) pair and held for the rest of the session. Every
/// consumer matches exhaustively; only `Unknown` produces an empty result
/// downstream.
///
/// # Example
///
/// ```
/// use contrastar::classify::VariableType;
/// use contrastar::suggest::{suggest_test, TestKind};
///
/// let test = suggest_test(VariableType::Continuous, VariableType::Categorical, 2);
/// assert_eq!(test, TestKind::TTest);
/// assert_eq!(test.to_string(), "T-test");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    /// Independent two-sample t-test on the first two groups.
    TTest,

    /// One-way ANOVA across all groups.
    Anova,

    /// Chi-square independence test on the contingency table.
    ChiSquare,

    /// Pearson or Spearman correlation, picked by a normality gate.
    Correlation,

    /// No supported test for this type combination.
    Unknown,
}

impl TestKind {
    /// Get all test kinds.
    #[must_use]
    pub fn all() -> &'static [TestKind] {
        &[
            Self::TTest,
            Self::Anova,
            Self::ChiSquare,
            Self::Correlation,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TTest => write!(f, "T-test"),
            Self::Anova => write!(f, "ANOVA"),
            Self::ChiSquare => write!(f, "Chi-square test"),
            Self::Correlation => write!(f, "Correlation (Pearson/Spearman)"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Suggests a test for the classified pair. Pure; no side effects.
///
/// | x | y | y levels | suggestion |
/// |---|---|---|---|
/// | Continuous | categorical-like | == 2 | T-test |
/// | Continuous | categorical-like | != 2 | ANOVA |
/// | categorical-like | categorical-like | any | Chi-square test |
/// | Continuous | Continuous | any | Correlation |
/// | categorical-like | Continuous | any | Unknown |
#[must_use]
pub fn suggest_test(
    x_type: VariableType,
    y_type: VariableType,
    y_level_count: usize,
) -> TestKind {
    match (x_type.is_categorical_like(), y_type.is_categorical_like()) {
        (false, true) => {
            if y_level_count == 2 {
                TestKind::TTest
            } else {
                TestKind::Anova
            }
        }
        (true, true) => TestKind::ChiSquare,
        (false, false) => TestKind::Correlation,
        (true, false) => TestKind::Unknown,
    }
}

/// Renders the "why this test" sentence shown beside the suggestion.
#[must_use]
pub fn selection_rationale(
    x_type: VariableType,
    y_type: VariableType,
    y_level_count: usize,
) -> String {
    let test = suggest_test(x_type, y_type, y_level_count);
    format!("X is {x_type}, Y is {y_type} with {y_level_count} levels: suggest {test}")
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
