//! `Dataset` module for named column containers.
//!
//! Provides a minimal column store for the guided testing workflow: numeric
//! and text columns with explicit missing markers, level enumeration, group
//! partitioning, and cross-tabulation. File ingestion (CSV/Excel) is the
//! caller's concern.

use std::fmt;

use serde::Serialize;

use crate::error::{ContrastarError, Result};

/// A single column of scalar values with missing markers.
///
/// `None` marks a missing entry. Numeric `NaN` inputs are normalized to
/// missing at construction so downstream statistics never see them.
///
/// # Examples
///
/// ```
/// use contrastar::data::Column;
///
/// let col = Column::from_slice(&[1.0, 2.0, f32::NAN, 2.0]);
/// assert_eq!(col.len(), 4);
/// assert_eq!(col.n_missing(), 1);
/// assert_eq!(col.n_distinct(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values.
    Numeric(Vec<Option<f32>>),
    /// Text values, treated as category labels.
    Text(Vec<Option<String>>),
}

/// A borrowed scalar cell value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum ValueRef<'a> {
    /// Numeric cell.
    Number(f32),
    /// Text cell.
    Text(&'a str),
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Number(n) => write!(f, "{n}"),
            ValueRef::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Column {
    /// Creates a numeric column from a slice. `NaN` becomes missing.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Self {
        Self::Numeric(
            values
                .iter()
                .map(|v| if v.is_nan() { None } else { Some(*v) })
                .collect(),
        )
    }

    /// Creates a numeric column from optional values. `Some(NaN)` becomes missing.
    #[must_use]
    pub fn from_options(values: Vec<Option<f32>>) -> Self {
        Self::Numeric(
            values
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect(),
        )
    }

    /// Creates a text column from string slices.
    #[must_use]
    pub fn from_strs(values: &[&str]) -> Self {
        Self::Text(values.iter().map(|s| Some((*s).to_string())).collect())
    }

    /// Creates a text column from optional string slices.
    #[must_use]
    pub fn from_opt_strs(values: &[Option<&str>]) -> Self {
        Self::Text(values.iter().map(|s| s.map(ToString::to_string)).collect())
    }

    /// Returns the number of entries, missing included.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// Returns true if the column has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for numeric columns.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// Returns the number of missing entries.
    #[must_use]
    pub fn n_missing(&self) -> usize {
        match self {
            Column::Numeric(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Returns the value at `idx`, or `None` if missing.
    #[must_use]
    pub fn value(&self, idx: usize) -> Option<ValueRef<'_>> {
        match self {
            Column::Numeric(v) => v.get(idx).copied().flatten().map(ValueRef::Number),
            Column::Text(v) => v
                .get(idx)
                .and_then(|s| s.as_deref())
                .map(ValueRef::Text),
        }
    }

    /// Returns the distinct non-missing values in first-encountered order.
    #[must_use]
    pub fn levels(&self) -> Vec<ValueRef<'_>> {
        let mut seen: Vec<ValueRef<'_>> = Vec::new();
        for idx in 0..self.len() {
            if let Some(v) = self.value(idx) {
                if !seen.contains(&v) {
                    seen.push(v);
                }
            }
        }
        seen
    }

    /// Returns the distinct non-missing values in ascending order
    /// (numeric by value, text lexically).
    #[must_use]
    pub fn sorted_levels(&self) -> Vec<ValueRef<'_>> {
        let mut levels = self.levels();
        levels.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        levels
    }

    /// Returns the count of distinct non-missing values.
    #[must_use]
    pub fn n_distinct(&self) -> usize {
        self.levels().len()
    }

    /// Returns occurrence counts per distinct value, first-encountered order.
    #[must_use]
    pub fn value_counts(&self) -> Vec<(ValueRef<'_>, usize)> {
        let mut counts: Vec<(ValueRef<'_>, usize)> = Vec::new();
        for idx in 0..self.len() {
            if let Some(v) = self.value(idx) {
                match counts.iter_mut().find(|(level, _)| *level == v) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((v, 1)),
                }
            }
        }
        counts
    }

    /// Returns the non-missing numeric values, or `None` for a text column.
    #[must_use]
    pub fn numeric_values(&self) -> Option<Vec<f32>> {
        match self {
            Column::Numeric(v) => Some(v.iter().copied().flatten().collect()),
            Column::Text(_) => None,
        }
    }
}

/// A minimal dataset with named columns of uniform length.
///
/// This is a thin wrapper around `Vec<(String, Column)>` with convenience
/// methods for the four-step workflow. Read-only once constructed.
///
/// # Examples
///
/// ```
/// use contrastar::data::{Column, Dataset};
///
/// let ds = Dataset::new(vec![
///     ("score".to_string(), Column::from_slice(&[1.0, 2.0, 3.0])),
///     ("group".to_string(), Column::from_strs(&["a", "b", "a"])),
/// ])
/// .expect("valid columns");
/// assert_eq!(ds.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl Dataset {
    /// Creates a new `Dataset` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if columns have different lengths, names are empty
    /// or duplicated, or no column is given.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ContrastarError::empty_input("dataset columns"));
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err(ContrastarError::dimension_mismatch(
                    "rows", n_rows, col.len(),
                ));
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        // Check for duplicate column names
        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        for i in 1..names.len() {
            if names[i] == names[i - 1] {
                return Err("Duplicate column names not allowed".into());
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a reference to a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`ContrastarError::ColumnNotFound`] if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| ContrastarError::column_not_found(name))
    }

    /// Returns an iterator over columns as (name, column) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    fn numeric_column(&self, name: &str) -> Result<&[Option<f32>]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            Column::Text(_) => Err(ContrastarError::precondition(format!(
                "column '{name}' is not numeric"
            ))),
        }
    }

    /// Partitions the non-missing values of `value_col` by the levels of
    /// `group_col`, returning (group label, values) pairs. `sorted` selects
    /// ascending level order; otherwise first-encountered order is kept.
    /// Rows missing in either column are dropped from their group.
    ///
    /// # Errors
    ///
    /// Returns an error if a column is absent or `value_col` is not numeric.
    pub fn numeric_by_group(
        &self,
        value_col: &str,
        group_col: &str,
        sorted: bool,
    ) -> Result<Vec<(String, Vec<f32>)>> {
        let values = self.numeric_column(value_col)?;
        let groups = self.column(group_col)?;

        let levels = if sorted {
            groups.sorted_levels()
        } else {
            groups.levels()
        };
        let mut out: Vec<(String, Vec<f32>)> = levels
            .iter()
            .map(|level| (level.to_string(), Vec::new()))
            .collect();

        for idx in 0..self.n_rows {
            let Some(level) = groups.value(idx) else {
                continue;
            };
            let Some(v) = values[idx] else {
                continue;
            };
            let pos = levels
                .iter()
                .position(|l| *l == level)
                .expect("level enumerated from its own column");
            out[pos].1.push(v);
        }

        Ok(out)
    }

    /// Returns the rows where both numeric columns are non-missing, as a
    /// pair of equal-length vectors (complete-case extraction).
    ///
    /// # Errors
    ///
    /// Returns an error if a column is absent or not numeric.
    pub fn paired_numeric(&self, x: &str, y: &str) -> Result<(Vec<f32>, Vec<f32>)> {
        let xs = self.numeric_column(x)?;
        let ys = self.numeric_column(y)?;

        let mut out_x = Vec::new();
        let mut out_y = Vec::new();
        for idx in 0..self.n_rows {
            if let (Some(a), Some(b)) = (xs[idx], ys[idx]) {
                out_x.push(a);
                out_y.push(b);
            }
        }
        Ok((out_x, out_y))
    }

    /// Cross-tabulates two columns into a contingency table of counts.
    /// Levels are sorted on both axes; rows missing in either column are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if either column is absent.
    pub fn crosstab(&self, x: &str, y: &str) -> Result<ContingencyTable> {
        let xcol = self.column(x)?;
        let ycol = self.column(y)?;

        let row_levels = xcol.sorted_levels();
        let col_levels = ycol.sorted_levels();
        let mut counts = vec![vec![0u64; col_levels.len()]; row_levels.len()];

        for idx in 0..self.n_rows {
            let (Some(xv), Some(yv)) = (xcol.value(idx), ycol.value(idx)) else {
                continue;
            };
            let r = row_levels
                .iter()
                .position(|l| *l == xv)
                .expect("level enumerated from its own column");
            let c = col_levels
                .iter()
                .position(|l| *l == yv)
                .expect("level enumerated from its own column");
            counts[r][c] += 1;
        }

        Ok(ContingencyTable {
            row_labels: row_levels.iter().map(ToString::to_string).collect(),
            col_labels: col_levels.iter().map(ToString::to_string).collect(),
            counts,
        })
    }

    /// Returns descriptive statistics for all columns.
    #[must_use]
    pub fn describe(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .map(|(name, col)| {
                let missing = col.n_missing();
                let count = col.len() - missing;
                let numeric = col.numeric_values().filter(|v| !v.is_empty());

                let (mean, std, min, max) = match numeric {
                    Some(values) => {
                        let n = values.len() as f64;
                        let sum: f64 = values.iter().map(|v| f64::from(*v)).sum();
                        let mean = sum / n;
                        let ss: f64 = values
                            .iter()
                            .map(|v| (f64::from(*v) - mean).powi(2))
                            .sum();
                        // Sample standard deviation, undefined below 2 values.
                        let std = if values.len() > 1 {
                            Some(((ss / (n - 1.0)).sqrt()) as f32)
                        } else {
                            None
                        };
                        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
                        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                        (Some(mean as f32), std, Some(min), Some(max))
                    }
                    None => (None, None, None, None),
                };

                ColumnSummary {
                    name: name.clone(),
                    count,
                    missing,
                    distinct: col.n_distinct(),
                    mean,
                    std,
                    min,
                    max,
                }
            })
            .collect()
    }
}

/// Descriptive statistics for a column. Numeric fields are `None` for text
/// columns and for columns without enough non-missing values.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of non-missing entries.
    pub count: usize,
    /// Number of missing entries.
    pub missing: usize,
    /// Number of distinct non-missing values.
    pub distinct: usize,
    /// Mean value.
    pub mean: Option<f32>,
    /// Sample standard deviation.
    pub std: Option<f32>,
    /// Minimum value.
    pub min: Option<f32>,
    /// Maximum value.
    pub max: Option<f32>,
}

/// Cross-tabulated counts of paired category occurrences between two columns.
///
/// Rows follow the first column's sorted levels, columns the second's.
#[derive(Debug, Clone, Serialize)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_labels.len(), self.col_labels.len())
    }

    /// Returns the row labels.
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Returns the column labels.
    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Returns the count matrix, row-major.
    #[must_use]
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Returns the grand total of all cells.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
