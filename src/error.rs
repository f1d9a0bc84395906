//! Error types for Contrastar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Contrastar operations.
///
/// Provides detailed context about failures including missing columns,
/// column-length mismatches, and violated statistical preconditions.
///
/// # Examples
///
/// ```
/// use contrastar::error::ContrastarError;
///
/// let err = ContrastarError::ColumnNotFound {
///     name: "age".to_string(),
/// };
/// assert!(err.to_string().contains("age"));
/// ```
#[derive(Debug)]
pub enum ContrastarError {
    /// Named column is absent from the dataset.
    ColumnNotFound {
        /// Requested column name
        name: String,
    },

    /// Column lengths don't match for the operation.
    DimensionMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// A statistical precondition does not hold (e.g. too few groups,
    /// zero variance, degenerate sample size).
    Precondition {
        /// What was required and what was found
        message: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ContrastarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastarError::ColumnNotFound { name } => {
                write!(f, "Column not found: '{name}'")
            }
            ContrastarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Column length mismatch: expected {expected}, got {actual}"
                )
            }
            ContrastarError::Precondition { message } => {
                write!(f, "Precondition violated: {message}")
            }
            ContrastarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ContrastarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ContrastarError {}

impl From<serde_json::Error> for ContrastarError {
    fn from(err: serde_json::Error) -> Self {
        ContrastarError::Serialization(err.to_string())
    }
}

impl From<&str> for ContrastarError {
    fn from(msg: &str) -> Self {
        ContrastarError::Other(msg.to_string())
    }
}

impl From<String> for ContrastarError {
    fn from(msg: String) -> Self {
        ContrastarError::Other(msg)
    }
}

impl ContrastarError {
    /// Create a column-not-found error
    #[must_use]
    pub fn column_not_found(name: &str) -> Self {
        Self::ColumnNotFound {
            name: name.to_string(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a precondition violation error
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for ContrastarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<ContrastarError> for &str {
    fn eq(&self, other: &ContrastarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ContrastarError>;
