//! Variable classification by observed values.
//!
//! The classifier is a pure function of a column's contents: numeric
//! low-cardinality columns are treated as grouping labels, numeric
//! high-cardinality columns as continuous measurements, and text columns as
//! categorical regardless of cardinality.

use std::fmt;

use crate::data::Column;

/// Largest distinct-value count at which a numeric column still counts as
/// categorical. The boundary is inclusive on the categorical side.
pub const CATEGORICAL_MAX_LEVELS: usize = 10;

/// The type a column is treated as throughout the workflow.
///
/// Derived on demand from values via [`classify`]; never stored.
///
/// # Example
///
/// ```
/// use contrastar::classify::{classify, VariableType};
/// use contrastar::data::Column;
///
/// let col = Column::from_slice(&[1.0, 2.0, 1.0, 2.0]);
/// assert_eq!(classify(&col), VariableType::CategoricalNumeric);
/// assert!(classify(&col).is_categorical_like());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// Numeric with more than [`CATEGORICAL_MAX_LEVELS`] distinct values.
    Continuous,

    /// Non-numeric values, treated as grouping labels.
    Categorical,

    /// Numeric but low-cardinality, treated as grouping labels.
    CategoricalNumeric,
}

impl VariableType {
    /// True for both categorical kinds; the selector treats them uniformly.
    #[must_use]
    pub fn is_categorical_like(&self) -> bool {
        matches!(self, Self::Categorical | Self::CategoricalNumeric)
    }

    /// Get all variable types.
    #[must_use]
    pub fn all() -> &'static [VariableType] {
        &[Self::Continuous, Self::Categorical, Self::CategoricalNumeric]
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => write!(f, "Continuous"),
            Self::Categorical => write!(f, "Categorical"),
            Self::CategoricalNumeric => write!(f, "Categorical (numeric)"),
        }
    }
}

/// Classifies a column from its values.
///
/// Distinct-value counting excludes missing entries. An empty or all-missing
/// numeric column classifies as `CategoricalNumeric` (0 distinct values).
#[must_use]
pub fn classify(column: &Column) -> VariableType {
    if column.is_numeric() {
        if column.n_distinct() <= CATEGORICAL_MAX_LEVELS {
            VariableType::CategoricalNumeric
        } else {
            VariableType::Continuous
        }
    } else {
        VariableType::Categorical
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
