pub(crate) use super::*;
use crate::data::Column;

fn dataset(x: Column, y: Column) -> Dataset {
    Dataset::new(vec![("x".to_string(), x), ("y".to_string(), y)]).unwrap()
}

/// Ten evenly spaced values; comfortably accepted by Shapiro-Wilk.
fn smooth_x() -> Column {
    Column::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0])
}

fn two_groups_of_five() -> Column {
    Column::from_strs(&["a", "a", "a", "a", "a", "b", "b", "b", "b", "b"])
}

#[test]
fn test_clean_selection_raises_nothing() {
    let data = dataset(smooth_x(), two_groups_of_five());
    let warnings = check_assumptions(&data, "x", "y", TestKind::TTest);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn test_missing_values_in_x_are_reported() {
    let x = Column::from_options(vec![
        Some(1.0),
        None,
        Some(3.0),
        Some(4.0),
        Some(5.0),
        Some(6.0),
        Some(7.0),
        Some(8.0),
        Some(9.0),
        Some(10.0),
    ]);
    let data = dataset(x, two_groups_of_five());
    let warnings = check_assumptions(&data, "x", "y", TestKind::Correlation);
    assert_eq!(
        warnings,
        vec![AssumptionWarning::MissingValues {
            column: "x".to_string(),
            count: 1,
        }]
    );
}

#[test]
fn test_missing_values_reported_per_column_x_first() {
    let x = Column::from_options(vec![Some(1.0), None, Some(3.0), Some(4.0)]);
    let y = Column::from_opt_strs(&[Some("a"), Some("a"), None, None]);
    let data = dataset(x, y);
    let warnings = check_assumptions(&data, "x", "y", TestKind::Unknown);
    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[0],
        AssumptionWarning::MissingValues {
            column: "x".to_string(),
            count: 1,
        }
    );
    assert_eq!(
        warnings[1],
        AssumptionWarning::MissingValues {
            column: "y".to_string(),
            count: 2,
        }
    );
}

#[test]
fn test_small_groups_flagged_for_ttest() {
    let x = Column::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let y = Column::from_strs(&["a", "a", "a", "a", "b", "b"]);
    let data = dataset(x, y);
    let warnings = check_assumptions(&data, "x", "y", TestKind::TTest);
    assert!(warnings.contains(&AssumptionWarning::SmallGroups { min_size: 2 }));
}

#[test]
fn test_group_sizes_ignored_outside_group_tests() {
    let x = Column::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let y = Column::from_strs(&["a", "a", "a", "a", "b", "b"]);
    let data = dataset(x, y);
    for test in [TestKind::ChiSquare, TestKind::Correlation, TestKind::Unknown] {
        let warnings = check_assumptions(&data, "x", "y", test);
        assert!(warnings.is_empty(), "{test}: {warnings:?}");
    }
}

#[test]
fn test_skewed_x_fails_normality() {
    // Fibonacci growth is decisively non-normal at n = 10.
    let x = Column::from_slice(&[1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0]);
    let data = dataset(x, two_groups_of_five());
    let warnings = check_assumptions(&data, "x", "y", TestKind::Anova);
    assert_eq!(warnings.len(), 1);
    match &warnings[0] {
        AssumptionWarning::NonNormal { column, p_value } => {
            assert_eq!(column, "x");
            assert!(*p_value < SIGNIFICANCE_LEVEL);
        }
        other => panic!("expected NonNormal, got {other:?}"),
    }
}

#[test]
fn test_normality_not_checked_for_correlation() {
    let x = Column::from_slice(&[1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0]);
    let data = dataset(x, two_groups_of_five());
    let warnings = check_assumptions(&data, "x", "y", TestKind::Correlation);
    assert!(warnings.is_empty());
}

#[test]
fn test_too_few_observations_skips_normality() {
    let x = Column::from_slice(&[1.0, 2.0]);
    let y = Column::from_strs(&["a", "b"]);
    let data = dataset(x, y);
    let warnings = check_assumptions(&data, "x", "y", TestKind::TTest);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0], AssumptionWarning::SmallGroups { min_size: 1 });
    match &warnings[1] {
        AssumptionWarning::NormalityCheckSkipped { column, reason } => {
            assert_eq!(column, "x");
            assert!(reason.contains("at least 3"), "reason: {reason}");
        }
        other => panic!("expected NormalityCheckSkipped, got {other:?}"),
    }
}

#[test]
fn test_constant_x_skips_normality() {
    let x = Column::from_slice(&[4.0; 10]);
    let data = dataset(x, two_groups_of_five());
    let warnings = check_assumptions(&data, "x", "y", TestKind::TTest);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        AssumptionWarning::NormalityCheckSkipped { .. }
    ));
}

#[test]
fn test_unknown_columns_raise_nothing() {
    let data = dataset(smooth_x(), two_groups_of_five());
    let warnings = check_assumptions(&data, "nope", "missing", TestKind::TTest);
    assert!(warnings.is_empty());
}

#[test]
fn test_text_x_gets_no_normality_check() {
    let x = Column::from_strs(&["p", "q", "p", "q", "p", "q"]);
    let y = Column::from_strs(&["a", "a", "a", "b", "b", "b"]);
    let data = dataset(x, y);
    let warnings = check_assumptions(&data, "x", "y", TestKind::TTest);
    assert_eq!(warnings, vec![AssumptionWarning::SmallGroups { min_size: 3 }]);
}

#[test]
fn test_all_missing_grouping_column_has_no_smallest_group() {
    let y = Column::from_opt_strs(&[None; 10]);
    let data = dataset(smooth_x(), y);
    let warnings = check_assumptions(&data, "x", "y", TestKind::Anova);
    assert_eq!(
        warnings,
        vec![AssumptionWarning::MissingValues {
            column: "y".to_string(),
            count: 10,
        }]
    );
}

#[test]
fn test_warning_display_texts() {
    let missing = AssumptionWarning::MissingValues {
        column: "bp".to_string(),
        count: 3,
    };
    assert_eq!(
        missing.to_string(),
        "Missing values detected in 'bp' (3 rows)."
    );

    let small = AssumptionWarning::SmallGroups { min_size: 2 };
    assert_eq!(
        small.to_string(),
        "Small group sizes (smallest group has 2 observations)."
    );

    let non_normal = AssumptionWarning::NonNormal {
        column: "bp".to_string(),
        p_value: 0.0123,
    };
    assert_eq!(
        non_normal.to_string(),
        "'bp' may not be normally distributed (Shapiro-Wilk p = 0.0123)."
    );

    let skipped = AssumptionWarning::NormalityCheckSkipped {
        column: "bp".to_string(),
        reason: "requires at least 3 observations".to_string(),
    };
    assert!(skipped.to_string().contains("skipped"));
    assert!(skipped.to_string().contains("requires at least 3"));
}

#[test]
fn test_min_group_size_constant() {
    assert_eq!(MIN_GROUP_SIZE, 5);
}
