//! Demonstration datasets for each calculator
//!
//! Raw text in the same shape a user would type it.

use crate::request::TestRequest;

pub const ONE_SAMPLE: &str = "85, 90, 78, 92, 88, 76, 94, 82, 89, 91";
pub const ONE_SAMPLE_MEAN: &str = "85";

pub const INDEPENDENT_1: &str = "85, 90, 78, 92, 88";
pub const INDEPENDENT_2: &str = "76, 94, 82, 89, 91";

pub const PAIRED_BEFORE: &str = "85, 90, 78, 92, 88";
pub const PAIRED_AFTER: &str = "83, 88, 80, 90, 86";

pub const F_TEST_1: &str = "85, 90, 78, 92, 88, 76, 94";
pub const F_TEST_2: &str = "82, 89, 91, 77, 85, 93, 80";

pub const GOODNESS_OF_FIT_OBSERVED: &str = "20, 30, 25, 15";
pub const GOODNESS_OF_FIT_EXPECTED: &str = "22.5, 22.5, 22.5, 22.5";

pub const INDEPENDENCE_TABLE: &str = "10, 20, 15\n25, 30, 20";

pub const ANOVA_GROUPS: &str = "85, 90, 78, 92, 88\n76, 94, 82, 89, 91\n80, 85, 87, 83, 86";

/// Every demonstration request, one per test
pub fn all() -> Vec<TestRequest> {
    vec![
        TestRequest::OneSampleT {
            sample: ONE_SAMPLE.into(),
            population_mean: ONE_SAMPLE_MEAN.into(),
        },
        TestRequest::IndependentT {
            sample1: INDEPENDENT_1.into(),
            sample2: INDEPENDENT_2.into(),
        },
        TestRequest::PairedT {
            sample1: PAIRED_BEFORE.into(),
            sample2: PAIRED_AFTER.into(),
        },
        TestRequest::FTest {
            sample1: F_TEST_1.into(),
            sample2: F_TEST_2.into(),
        },
        TestRequest::ChiSquareGoodnessOfFit {
            observed: GOODNESS_OF_FIT_OBSERVED.into(),
            expected: GOODNESS_OF_FIT_EXPECTED.into(),
        },
        TestRequest::ChiSquareIndependence {
            observed: INDEPENDENCE_TABLE.into(),
        },
        TestRequest::OneWayAnova {
            groups: ANOVA_GROUPS.into(),
        },
    ]
}
