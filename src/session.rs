//! The four-step analysis session.
//!
//! A [`Session`] owns one dataset and walks a strictly linear wizard:
//! upload, variable selection, assumption check, results. Every piece of
//! state lives in the session struct; steps move one at a time and saturate
//! at both ends. Re-selecting variables invalidates everything computed
//! after selection, so stale warnings or reports cannot leak into a new
//! analysis.

use std::fmt;

use crate::analyze::{run_test, TestReport};
use crate::assumptions::{check_assumptions, AssumptionWarning};
use crate::classify::{classify, VariableType};
use crate::data::Dataset;
use crate::error::{ContrastarError, Result};
use crate::interpret::interpret;
use crate::suggest::{selection_rationale, suggest_test, TestKind};

/// The wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Data ingestion; finished the moment a session is constructed.
    Upload,

    /// Pick x and y, see the classification and suggested test.
    SelectVariables,

    /// Review assumption warnings, then run the test.
    CheckAndRun,

    /// Inspect the report, interpretation, and JSON export.
    ResultsAndExport,
}

impl Step {
    /// The following step; the terminal step repeats itself.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Upload => Self::SelectVariables,
            Self::SelectVariables => Self::CheckAndRun,
            Self::CheckAndRun | Self::ResultsAndExport => Self::ResultsAndExport,
        }
    }

    /// The preceding step; the initial step repeats itself.
    #[must_use]
    pub fn back(self) -> Self {
        match self {
            Self::Upload | Self::SelectVariables => Self::Upload,
            Self::CheckAndRun => Self::SelectVariables,
            Self::ResultsAndExport => Self::CheckAndRun,
        }
    }

    /// 1-based position for "Step n of 4" headers.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Upload => 1,
            Self::SelectVariables => 2,
            Self::CheckAndRun => 3,
            Self::ResultsAndExport => 4,
        }
    }

    /// Get all steps in wizard order.
    #[must_use]
    pub fn all() -> &'static [Step] {
        &[
            Self::Upload,
            Self::SelectVariables,
            Self::CheckAndRun,
            Self::ResultsAndExport,
        ]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => write!(f, "Upload Data"),
            Self::SelectVariables => write!(f, "Select Variables"),
            Self::CheckAndRun => write!(f, "Check Assumptions & Run Test"),
            Self::ResultsAndExport => write!(f, "Results & Export"),
        }
    }
}

/// The variable pair chosen in step 2, with everything derived from it.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Measured/outcome column name.
    pub x: String,

    /// Grouping/second column name.
    pub y: String,

    /// Classification of x.
    pub x_type: VariableType,

    /// Classification of y.
    pub y_type: VariableType,

    /// Distinct non-missing values in y.
    pub y_levels: usize,

    /// The suggested test for this pair.
    pub test: TestKind,
}

impl Selection {
    /// The "why this test" sentence for this selection.
    #[must_use]
    pub fn rationale(&self) -> String {
        selection_rationale(self.x_type, self.y_type, self.y_levels)
    }
}

/// Which visualization fits a test's result.
///
/// Rendering is out of scope for this crate; the variant only names the
/// shape an embedding UI should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// One box per group of y, heights from x.
    GroupedBox,

    /// x against y, one point per row.
    Scatter,

    /// One bar per x level, stacked by y level counts.
    StackedBar,
}

/// The visualization for a test kind; `Unknown` has none.
#[must_use]
pub fn plot_kind(test: TestKind) -> Option<PlotKind> {
    match test {
        TestKind::TTest | TestKind::Anova => Some(PlotKind::GroupedBox),
        TestKind::Correlation => Some(PlotKind::Scatter),
        TestKind::ChiSquare => Some(PlotKind::StackedBar),
        TestKind::Unknown => None,
    }
}

/// One analysis session over one dataset.
///
/// # Example
///
/// ```
/// use contrastar::data::{Column, Dataset};
/// use contrastar::session::{Session, Step};
/// use contrastar::suggest::TestKind;
///
/// let data = Dataset::new(vec![
///     (
///         "hr".to_string(),
///         Column::from_slice(&[
///             62.0, 71.0, 64.0, 68.0, 75.0, 59.0, 81.0, 78.0, 84.0, 77.0, 86.0, 74.0,
///         ]),
///     ),
///     (
///         "group".to_string(),
///         Column::from_strs(&["a", "a", "a", "a", "a", "a", "b", "b", "b", "b", "b", "b"]),
///     ),
/// ])?;
///
/// let mut session = Session::new(data);
/// session.select_variables("hr", "group")?;
/// assert_eq!(session.selection().unwrap().test, TestKind::TTest);
///
/// session.advance();
/// session.run()?;
/// assert_eq!(session.step(), Step::ResultsAndExport);
/// assert!(session.interpretation().unwrap().starts_with("The T-test yielded"));
/// # Ok::<(), contrastar::error::ContrastarError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    step: Step,
    selection: Option<Selection>,
    warnings: Vec<AssumptionWarning>,
    report: Option<TestReport>,
    interpretation: Option<String>,
}

impl Session {
    /// Starts a session on an already-loaded dataset, at the selection step.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            step: Step::SelectVariables,
            selection: None,
            warnings: Vec::new(),
            report: None,
            interpretation: None,
        }
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// The dataset this session analyzes.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current variable selection, if one was made.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Warnings computed when the check step was entered.
    #[must_use]
    pub fn warnings(&self) -> &[AssumptionWarning] {
        &self.warnings
    }

    /// The report of the last run, if any.
    #[must_use]
    pub fn report(&self) -> Option<&TestReport> {
        self.report.as_ref()
    }

    /// The interpretation sentence of the last run, if any.
    #[must_use]
    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }

    /// Chooses the variable pair and derives classification, level count,
    /// and the suggested test. Any previously computed warnings, report, and
    /// interpretation are discarded. The step does not move.
    ///
    /// # Errors
    ///
    /// Returns an error if either column name is not in the dataset; the
    /// session is left unchanged in that case.
    pub fn select_variables(&mut self, x: &str, y: &str) -> Result<()> {
        let x_type = classify(self.dataset.column(x)?);
        let y_column = self.dataset.column(y)?;
        let y_type = classify(y_column);
        let y_levels = y_column.n_distinct();
        let test = suggest_test(x_type, y_type, y_levels);

        self.selection = Some(Selection {
            x: x.to_string(),
            y: y.to_string(),
            x_type,
            y_type,
            y_levels,
            test,
        });
        self.warnings.clear();
        self.report = None;
        self.interpretation = None;
        Ok(())
    }

    /// Moves one step forward; a no-op at the terminal step. Entering the
    /// check step computes the assumption warnings for the current
    /// selection.
    pub fn advance(&mut self) {
        self.move_to(self.step.next());
    }

    /// Moves one step backward; a no-op at the initial step. Re-entering
    /// the check step recomputes the warnings.
    pub fn back(&mut self) {
        self.move_to(self.step.back());
    }

    /// Runs the suggested test and advances to the results step.
    ///
    /// An `Unknown` suggestion runs to an empty report rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not at the check step, no
    /// variables are selected, or the test itself fails; the step does not
    /// move on error.
    pub fn run(&mut self) -> Result<()> {
        if self.step != Step::CheckAndRun {
            return Err(ContrastarError::precondition(
                "tests can only run from the check step",
            ));
        }
        let (x, y, test) = match &self.selection {
            Some(s) => (s.x.clone(), s.y.clone(), s.test),
            None => return Err(ContrastarError::precondition("no variables selected")),
        };

        let report = run_test(&self.dataset, &x, &y, test)?;
        self.interpretation = Some(interpret(test, &report));
        self.report = Some(report);
        self.step = Step::ResultsAndExport;
        Ok(())
    }

    /// The results as a JSON object; an empty object before any run.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn results_json(&self) -> Result<String> {
        match &self.report {
            Some(report) => report.to_json(),
            None => TestReport::Empty.to_json(),
        }
    }

    fn move_to(&mut self, target: Step) {
        if target == Step::CheckAndRun && self.step != Step::CheckAndRun {
            self.warnings = match &self.selection {
                Some(s) => check_assumptions(&self.dataset, &s.x, &s.y, s.test),
                None => Vec::new(),
            };
        }
        self.step = target;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
