//! Text-level entry point
//!
//! A [`TestRequest`] carries the raw calculator fields; [`evaluate`] parses
//! them and dispatches to the matching test routine.

use serde::{Deserialize, Serialize};

use crate::parse::{parse_groups, parse_matrix, parse_population_mean, parse_sample};
use crate::tests::{
    settle, try_chi_square_goodness_of_fit, try_chi_square_independence, try_f_test,
    try_independent_t_test, try_one_sample_t_test, try_one_way_anova, try_paired_t_test,
};
use crate::types::{StatisticalResult, TestKind, TestOptions};
use crate::StatsResult;

/// Raw calculator input, tagged by test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "kebab-case")]
pub enum TestRequest {
    OneSampleT {
        sample: String,
        #[serde(default)]
        population_mean: String,
    },
    IndependentT {
        sample1: String,
        sample2: String,
    },
    PairedT {
        sample1: String,
        sample2: String,
    },
    FTest {
        sample1: String,
        sample2: String,
    },
    ChiSquareGoodnessOfFit {
        observed: String,
        expected: String,
    },
    ChiSquareIndependence {
        /// One row per line
        observed: String,
    },
    OneWayAnova {
        /// One group per line
        groups: String,
    },
}

impl TestRequest {
    pub fn kind(&self) -> TestKind {
        match self {
            TestRequest::OneSampleT { .. } => TestKind::OneSampleT,
            TestRequest::IndependentT { .. } => TestKind::IndependentT,
            TestRequest::PairedT { .. } => TestKind::PairedT,
            TestRequest::FTest { .. } => TestKind::FTest,
            TestRequest::ChiSquareGoodnessOfFit { .. } => TestKind::ChiSquareGoodnessOfFit,
            TestRequest::ChiSquareIndependence { .. } => TestKind::ChiSquareIndependence,
            TestRequest::OneWayAnova { .. } => TestKind::OneWayAnova,
        }
    }
}

/// JSON envelope: `{"request": {...}, "options": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub request: TestRequest,
    #[serde(default)]
    pub options: TestOptions,
}

/// Parses the request fields and runs the test
pub fn try_evaluate(
    request: &TestRequest,
    options: &TestOptions,
) -> StatsResult<StatisticalResult> {
    match request {
        TestRequest::OneSampleT {
            sample,
            population_mean,
        } => try_one_sample_t_test(
            &parse_sample(sample),
            parse_population_mean(population_mean),
            options,
        ),
        TestRequest::IndependentT { sample1, sample2 } => {
            try_independent_t_test(&parse_sample(sample1), &parse_sample(sample2), options)
        }
        TestRequest::PairedT { sample1, sample2 } => {
            try_paired_t_test(&parse_sample(sample1), &parse_sample(sample2), options)
        }
        TestRequest::FTest { sample1, sample2 } => {
            try_f_test(&parse_sample(sample1), &parse_sample(sample2), options)
        }
        TestRequest::ChiSquareGoodnessOfFit { observed, expected } => {
            let (observed, expected) = (parse_sample(observed), parse_sample(expected));
            try_chi_square_goodness_of_fit(&observed, &expected, options)
        }
        TestRequest::ChiSquareIndependence { observed } => {
            try_chi_square_independence(&parse_matrix(observed), options)
        }
        TestRequest::OneWayAnova { groups } => try_one_way_anova(&parse_groups(groups), options),
    }
}

/// [`try_evaluate`], with "not computed" as `None`
pub fn evaluate(request: &TestRequest, options: &TestOptions) -> Option<StatisticalResult> {
    settle(request.kind(), try_evaluate(request, options))
}

/// Runs an [`Envelope`] given as JSON and returns the result as JSON
pub fn evaluate_json(json: &str) -> StatsResult<String> {
    let envelope: Envelope = serde_json::from_str(json)?;
    let result = try_evaluate(&envelope.request, &envelope.options)?;
    Ok(serde_json::to_string(&result)?)
}
