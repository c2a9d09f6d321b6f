//! Hypothesis test engine
//!
//! Each routine turns raw samples into a [`StatisticalResult`]. Routines come
//! in two forms: `try_*` explains why nothing was computed, the plain form
//! returns `None` instead. Degenerate statistics (NaN, infinity) are results,
//! not errors.


pub use categorical::{
    chi_square_goodness_of_fit, chi_square_independence, try_chi_square_goodness_of_fit,
    try_chi_square_independence,
};
pub use parametric::{
    f_test, independent_t_test, one_sample_t_test, one_way_anova, paired_t_test, try_f_test,
    try_independent_t_test, try_one_sample_t_test, try_one_way_anova, try_paired_t_test,
};

use log::{debug, warn};

use crate::critical::{
    chi_square_p_value, exact_chi_square_critical, exact_f_critical, exact_t_critical,
    f_p_value, lookup_chi_square, lookup_f, lookup_t, t_p_value, CriticalValue,
};
use crate::types::{
    CalculationStep, CriticalValueMode, Decision, DegreesOfFreedom, StatisticalResult, TestKind,
    TestOptions, Warning,
};
use crate::{StatsError, StatsResult};

/// Statistic and narrative before the decision is taken
#[derive(Debug, Clone)]
pub(crate) struct Computation {
    pub test: TestKind,
    pub steps: Vec<CalculationStep>,
    pub statistic: f64,
    pub df: DegreesOfFreedom,
}

/// Wording for each outcome
pub(crate) struct Conclusions {
    pub reject: &'static str,
    pub fail_to_reject: &'static str,
}

/// Reference distribution a test statistic is judged against
#[derive(Debug, Clone, Copy)]
enum Reference {
    StudentsT(usize),
    FisherSnedecor(usize, usize),
    ChiSquare(usize),
}

impl Reference {
    fn of(test: TestKind, df: DegreesOfFreedom) -> Self {
        match (test, df) {
            (TestKind::FTest | TestKind::OneWayAnova, DegreesOfFreedom::Pair(df1, df2)) => {
                Reference::FisherSnedecor(df1, df2)
            }
            (TestKind::FTest | TestKind::OneWayAnova, DegreesOfFreedom::Single(df)) => {
                Reference::FisherSnedecor(1, df)
            }
            (TestKind::ChiSquareGoodnessOfFit | TestKind::ChiSquareIndependence, df) => {
                Reference::ChiSquare(df.denominator())
            }
            (_, df) => Reference::StudentsT(df.denominator()),
        }
    }

    fn table(self, alpha: f64) -> CriticalValue {
        match self {
            Reference::StudentsT(df) => lookup_t(df, alpha),
            Reference::FisherSnedecor(df1, df2) => lookup_f(df1, df2, alpha),
            Reference::ChiSquare(df) => lookup_chi_square(df, alpha),
        }
    }

    fn exact(self, alpha: f64) -> StatsResult<f64> {
        match self {
            Reference::StudentsT(df) => exact_t_critical(df, alpha),
            Reference::FisherSnedecor(df1, df2) => exact_f_critical(df1, df2, alpha),
            Reference::ChiSquare(df) => exact_chi_square_critical(df, alpha),
        }
    }

    fn p_value(self, statistic: f64) -> StatsResult<f64> {
        match self {
            Reference::StudentsT(df) => t_p_value(statistic, df),
            Reference::FisherSnedecor(df1, df2) => f_p_value(statistic, df1, df2),
            Reference::ChiSquare(df) => chi_square_p_value(statistic, df),
        }
    }
}

/// Looks up the critical value and applies the shared decision rule
pub(crate) fn conclude(
    computation: Computation,
    options: &TestOptions,
    conclusions: Conclusions,
) -> StatisticalResult {
    let Computation {
        test,
        steps,
        statistic,
        df,
    } = computation;
    let alpha = options.alpha.value();
    let reference = Reference::of(test, df);
    let mut warnings = Vec::new();

    let table = |warnings: &mut Vec<Warning>| {
        let cv = reference.table(alpha);
        if let Some(miss) = cv.miss {
            warnings.push(Warning::LookupFallback { miss });
        }
        cv.value
    };

    let (critical_value, p_value) = match options.mode {
        CriticalValueMode::Table => (table(&mut warnings), None),
        CriticalValueMode::Exact => match reference.exact(alpha) {
            Ok(value) => {
                let p_value = reference.p_value(statistic).ok().filter(|p| !p.is_nan());
                (value, p_value)
            }
            Err(e) => {
                debug!("{}: exact critical value unavailable ({}), using table", test, e);
                warnings.push(Warning::ExactUnavailable {
                    reason: e.to_string(),
                });
                (table(&mut warnings), None)
            }
        },
    };

    if !statistic.is_finite() {
        warn!("{}: degenerate test statistic {}", test, statistic);
        warnings.push(Warning::DegenerateStatistic { value: statistic });
    }

    let compared = if test.is_two_tailed() {
        statistic.abs()
    } else {
        statistic
    };
    let decision = Decision::from_comparison(compared, critical_value);
    let conclusion = match decision {
        Decision::Reject => conclusions.reject,
        Decision::FailToReject => conclusions.fail_to_reject,
    };

    StatisticalResult {
        test,
        steps,
        test_statistic: statistic,
        degrees_of_freedom: df,
        critical_value,
        p_value,
        alpha: options.alpha,
        decision,
        conclusion: conclusion.to_string(),
        warnings,
    }
}

/// Collapses a declined computation into `None`
pub(crate) fn settle(
    test: TestKind,
    result: StatsResult<StatisticalResult>,
) -> Option<StatisticalResult> {
    match result {
        Ok(r) => Some(r),
        Err(e) => {
            debug!("{} not computed: {}", test, e);
            None
        }
    }
}

/// Rejects an empty sample before any arithmetic runs
pub(crate) fn require_non_empty(sample: &[f64], field: &'static str) -> StatsResult<()> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LookupMiss, SignificanceLevel};

    fn computation(test: TestKind, statistic: f64, df: DegreesOfFreedom) -> Computation {
        Computation {
            test,
            steps: Vec::new(),
            statistic,
            df,
        }
    }

    fn run(
        test: TestKind,
        statistic: f64,
        df: DegreesOfFreedom,
        opts: &TestOptions,
    ) -> StatisticalResult {
        conclude(computation(test, statistic, df), opts, WORDS)
    }

    const WORDS: Conclusions = Conclusions {
        reject: "yes",
        fail_to_reject: "no",
    };

    #[test]
    fn test_two_tailed_uses_absolute_value() {
        let opts = TestOptions::default();
        let r = run(TestKind::OneSampleT, -3.0, DegreesOfFreedom::Single(10), &opts);
        assert_eq!(r.critical_value, 2.228);
        assert_eq!(r.decision, Decision::Reject);
        assert_eq!(r.conclusion, "yes");
    }

    #[test]
    fn test_one_tailed_uses_signed_value() {
        let opts = TestOptions::default();
        let r = run(TestKind::ChiSquareGoodnessOfFit, -10.0, DegreesOfFreedom::Single(3), &opts);
        assert_eq!(r.decision, Decision::FailToReject);
        assert_eq!(r.conclusion, "no");
    }

    #[test]
    fn test_degenerate_statistic_is_flagged_not_rejected() {
        let opts = TestOptions::default();
        let r = run(TestKind::FTest, f64::NAN, DegreesOfFreedom::Pair(4, 4), &opts);
        assert_eq!(r.decision, Decision::FailToReject);
        assert!(r.is_degenerate());
        assert!(matches!(r.warnings[0], Warning::DegenerateStatistic { .. }));
    }

    #[test]
    fn test_exact_mode_nan_statistic_has_no_p_value() {
        let opts = TestOptions::exact(SignificanceLevel::Five);
        let cases = [
            (TestKind::OneSampleT, DegreesOfFreedom::Single(3)),
            (TestKind::FTest, DegreesOfFreedom::Pair(2, 2)),
            (TestKind::OneWayAnova, DegreesOfFreedom::Pair(1, 2)),
            (TestKind::ChiSquareIndependence, DegreesOfFreedom::Single(1)),
        ];
        for (test, df) in cases {
            let r = run(test, f64::NAN, df, &opts);
            assert_eq!(r.p_value, None, "{}", test);
            assert_eq!(r.decision, Decision::FailToReject);
            assert!(r.is_degenerate());
        }
    }

    #[test]
    fn test_exact_mode_infinite_statistic_rejects() {
        let opts = TestOptions::exact(SignificanceLevel::One);
        let r = run(TestKind::PairedT, f64::NEG_INFINITY, DegreesOfFreedom::Single(4), &opts);
        assert_eq!(r.p_value, Some(0.0));
        assert_eq!(r.decision, Decision::Reject);
    }

    #[test]
    fn test_lookup_fallback_is_reported() {
        let opts = TestOptions::default();
        let r = run(TestKind::ChiSquareIndependence, 1.0, DegreesOfFreedom::Single(10), &opts);
        assert_eq!(r.critical_value, 3.841);
        assert_eq!(
            r.warnings,
            vec![Warning::LookupFallback {
                miss: LookupMiss::DfOutsideTable { requested: 10 }
            }]
        );
    }

    #[test]
    fn test_exact_mode_reports_p_value() {
        let opts = TestOptions::exact(SignificanceLevel::Five);
        let r = run(TestKind::PairedT, 0.0, DegreesOfFreedom::Single(4), &opts);
        assert!(r.p_value.is_some());
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_exact_mode_falls_back_on_zero_df() {
        let opts = TestOptions::exact(SignificanceLevel::Five);
        let r = run(TestKind::OneSampleT, 1.0, DegreesOfFreedom::Single(0), &opts);
        assert_eq!(r.critical_value, 12.706);
        assert_eq!(r.p_value, None);
        assert!(matches!(r.warnings[0], Warning::ExactUnavailable { .. }));
    }
}
