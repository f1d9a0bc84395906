//! Contrastar: guided hypothesis testing over tabular data.
//!
//! Contrastar walks the four steps of a basic two-variable analysis: load a
//! dataset, pick the variable pair, check the assumptions of the suggested
//! test, then run it and read the result in plain language. Variable
//! classification, test selection, and interpretation are deterministic, so
//! the same data always leads to the same conclusion.
//!
//! # Quick Start
//!
//! ```
//! use contrastar::prelude::*;
//!
//! // Heart rate for a control and a treatment group
//! let data = Dataset::new(vec![
//!     (
//!         "hr".to_string(),
//!         Column::from_slice(&[
//!             62.0, 71.0, 64.0, 68.0, 75.0, 59.0, 81.0, 78.0, 84.0, 77.0, 86.0, 74.0,
//!         ]),
//!     ),
//!     (
//!         "group".to_string(),
//!         Column::from_strs(&[
//!             "ctl", "ctl", "ctl", "ctl", "ctl", "ctl", "trt", "trt", "trt", "trt", "trt",
//!             "trt",
//!         ]),
//!     ),
//! ])
//! .unwrap();
//!
//! // Continuous outcome, two groups: a t-test is suggested
//! let mut session = Session::new(data);
//! session.select_variables("hr", "group").unwrap();
//! assert_eq!(session.selection().unwrap().test, TestKind::TTest);
//!
//! // Check assumptions, run, interpret
//! session.advance();
//! session.run().unwrap();
//! assert!(session.interpretation().unwrap().starts_with("The T-test yielded"));
//! ```
//!
//! # Modules
//!
//! - [`data`]: Columns, datasets, and the derived views tests consume
//! - [`classify`]: Continuous vs. categorical variable classification
//! - [`suggest`]: Test selection from the classified pair
//! - [`assumptions`]: Advisory pre-flight checks for a suggested test
//! - [`analyze`]: Test execution and the typed result report
//! - [`interpret`]: Plain-language interpretation of a report
//! - [`session`]: The four-step wizard state machine
//! - [`stats`]: Hypothesis tests, normality, and distribution tails

pub mod analyze;
pub mod assumptions;
pub mod classify;
pub mod data;
pub mod error;
pub mod interpret;
pub mod prelude;
pub mod session;
pub mod stats;
pub mod suggest;

pub use error::{ContrastarError, Result};
pub use session::Session;
