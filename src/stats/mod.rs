//! Statistical routines behind the guided workflow.
//!
//! This module provides the numerical layer the test runner and assumption
//! checker are built on:
//!
//! - Hypothesis tests (t-test, one-way ANOVA, chi-square independence,
//!   Pearson/Spearman correlation)
//! - Shapiro-Wilk normality testing (AS R94)
//! - Tail-probability helpers over `statrs` distributions
//!
//! Statistics are reported as f32; internal accumulation runs in f64.

pub mod distribution;
pub mod hypothesis;
pub mod normality;

pub use hypothesis::{
    chi2_independence, f_oneway, pearsonr, spearmanr, ttest_ind, AnovaResult, ChiSquareResult,
    CorrelationResult, TTestResult,
};
pub use normality::{shapiro, ShapiroResult, SHAPIRO_MAX_N};

/// Significance threshold applied throughout the workflow (p < 0.05).
pub const SIGNIFICANCE_LEVEL: f32 = 0.05;
