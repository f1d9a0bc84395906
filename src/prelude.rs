//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contrastar::prelude::*;
//! ```

pub use crate::analyze::{run_test, CorrelationMethod, TestReport};
pub use crate::assumptions::{check_assumptions, AssumptionWarning};
pub use crate::classify::{classify, VariableType};
pub use crate::data::{Column, ColumnSummary, ContingencyTable, Dataset, ValueRef};
pub use crate::error::{ContrastarError, Result};
pub use crate::interpret::interpret;
pub use crate::session::{plot_kind, PlotKind, Selection, Session, Step};
pub use crate::stats::SIGNIFICANCE_LEVEL;
pub use crate::suggest::{suggest_test, TestKind};
