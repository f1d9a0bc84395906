pub(crate) use super::*;
use crate::analyze::CorrelationMethod;
use crate::stats::{AnovaResult, ChiSquareResult, CorrelationResult, TTestResult};

fn ttest_report(pvalue: f32) -> TestReport {
    TestReport::TTest(TTestResult {
        statistic: -2.27,
        pvalue,
        df: 18.0,
    })
}

#[test]
fn test_significant_sentence() {
    let sentence = interpret(TestKind::TTest, &ttest_report(0.0321));
    assert_eq!(
        sentence,
        "The T-test yielded a p-value of 0.0321, which is statistically significant."
    );
}

#[test]
fn test_empty_report_reads_as_p_one() {
    let sentence = interpret(TestKind::Unknown, &TestReport::Empty);
    assert_eq!(
        sentence,
        "The Unknown yielded a p-value of 1.0000, which is not statistically significant."
    );
}

#[test]
fn test_threshold_is_strict() {
    assert!(interpret(TestKind::TTest, &ttest_report(0.05))
        .ends_with("not statistically significant."));
    assert!(interpret(TestKind::TTest, &ttest_report(0.0499))
        .ends_with("which is statistically significant."));
}

#[test]
fn test_tiny_p_rounds_to_four_places() {
    let sentence = interpret(TestKind::TTest, &ttest_report(0.00001));
    assert!(
        sentence.contains("a p-value of 0.0000, which is statistically significant."),
        "{sentence}"
    );
}

#[test]
fn test_each_kind_keeps_its_label() {
    let anova = TestReport::Anova(AnovaResult {
        statistic: 3.0,
        pvalue: 0.125,
        df_between: 2,
        df_within: 6,
    });
    assert!(interpret(TestKind::Anova, &anova).starts_with("The ANOVA yielded"));

    let chi = TestReport::ChiSquare(ChiSquareResult {
        statistic: 5.4,
        pvalue: 0.0201,
        df: 1,
    });
    assert!(interpret(TestKind::ChiSquare, &chi).starts_with("The Chi-square test yielded"));

    let corr = TestReport::Correlation {
        result: CorrelationResult {
            statistic: 0.82,
            pvalue: 0.0878,
            df: 3,
        },
        method: CorrelationMethod::Pearson,
    };
    assert!(interpret(TestKind::Correlation, &corr)
        .starts_with("The Correlation (Pearson/Spearman) yielded"));
}
