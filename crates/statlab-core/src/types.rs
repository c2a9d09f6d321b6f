use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};

/// Significance level accepted by every test
///
/// Only the two levels the classroom tables carry are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SignificanceLevel {
    /// α = 0.05
    #[default]
    Five,
    /// α = 0.01
    One,
}

impl SignificanceLevel {
    pub fn value(self) -> f64 {
        match self {
            SignificanceLevel::Five => 0.05,
            SignificanceLevel::One => 0.01,
        }
    }
}

impl TryFrom<f64> for SignificanceLevel {
    type Error = StatsError;

    fn try_from(alpha: f64) -> StatsResult<Self> {
        if alpha == 0.05 {
            Ok(SignificanceLevel::Five)
        } else if alpha == 0.01 {
            Ok(SignificanceLevel::One)
        } else {
            Err(StatsError::InvalidSignificance(alpha))
        }
    }
}

impl From<SignificanceLevel> for f64 {
    fn from(level: SignificanceLevel) -> f64 {
        level.value()
    }
}

impl FromStr for SignificanceLevel {
    type Err = StatsError;

    fn from_str(s: &str) -> StatsResult<Self> {
        let text = s.trim();
        let alpha: f64 = text
            .parse()
            .map_err(|_| StatsError::UnparsedSignificance(text.to_string()))?;
        SignificanceLevel::try_from(alpha)
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Where critical values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriticalValueMode {
    /// Small hard-coded classroom tables with their fallback rules
    #[default]
    Table,
    /// Quantile functions of the reference distributions; also reports p-values
    Exact,
}

/// Options shared by every test routine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    /// Significance level (default: 0.05)
    pub alpha: SignificanceLevel,
    /// Critical value source (default: table)
    pub mode: CriticalValueMode,
}

impl TestOptions {
    pub fn with_alpha(alpha: SignificanceLevel) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    pub fn exact(alpha: SignificanceLevel) -> Self {
        Self {
            alpha,
            mode: CriticalValueMode::Exact,
        }
    }
}

/// The hypothesis test that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    OneSampleT,
    IndependentT,
    PairedT,
    FTest,
    ChiSquareGoodnessOfFit,
    ChiSquareIndependence,
    OneWayAnova,
}

impl TestKind {
    pub fn name(self) -> &'static str {
        match self {
            TestKind::OneSampleT => "One-Sample t-Test",
            TestKind::IndependentT => "Independent Samples t-Test",
            TestKind::PairedT => "Paired Samples t-Test",
            TestKind::FTest => "F-Test",
            TestKind::ChiSquareGoodnessOfFit => "Chi-Square Goodness of Fit",
            TestKind::ChiSquareIndependence => "Chi-Square Test of Independence",
            TestKind::OneWayAnova => "One-Way ANOVA",
        }
    }

    /// t-tests compare |statistic| against a two-tailed table
    pub fn is_two_tailed(self) -> bool {
        matches!(
            self,
            TestKind::OneSampleT | TestKind::IndependentT | TestKind::PairedT
        )
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome for the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    Reject,
    FailToReject,
}

impl Decision {
    /// Strict comparison; a NaN statistic never rejects.
    pub fn from_comparison(statistic: f64, critical_value: f64) -> Self {
        if statistic > critical_value {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }

    pub fn is_reject(self) -> bool {
        self == Decision::Reject
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => f.write_str("Reject H₀"),
            Decision::FailToReject => f.write_str("Fail to Reject H₀"),
        }
    }
}

/// Degrees of freedom: one value, or (numerator, denominator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DegreesOfFreedom {
    Single(usize),
    Pair(usize, usize),
}

impl DegreesOfFreedom {
    /// The df that drives a single-parameter lookup, or the denominator df
    pub fn denominator(self) -> usize {
        match self {
            DegreesOfFreedom::Single(df) => df,
            DegreesOfFreedom::Pair(_, df2) => df2,
        }
    }
}

impl fmt::Display for DegreesOfFreedom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreesOfFreedom::Single(df) => write!(f, "{}", df),
            DegreesOfFreedom::Pair(df1, df2) => write!(f, "({}, {})", df1, df2),
        }
    }
}

/// One labelled line of the calculation narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub label: String,
    pub result: String,
}

/// How a table lookup strayed from an exact table cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LookupMiss {
    /// Requested df above the table; the largest row was used
    DfAboveTable { requested: usize, used: usize },
    /// df not in the table; the fixed default was returned
    DfOutsideTable { requested: usize },
    /// α has no column in the table; the fixed default was returned
    UnmappedAlpha { alpha: f64 },
}

/// Non-fatal conditions noticed while computing a result
///
/// Warnings never change the decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Warning {
    /// The statistic is NaN or infinite (zero variance, zero expected count)
    DegenerateStatistic { value: f64 },
    /// The critical value came from a table fallback
    LookupFallback { miss: LookupMiss },
    /// Exact mode could not build the distribution; table value used instead
    ExactUnavailable { reason: String },
}

/// Output of every hypothesis test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalResult {
    /// Which test produced this result
    pub test: TestKind,
    /// Calculation narrative, for display only
    pub steps: Vec<CalculationStep>,
    /// Test statistic at full precision (t, F or χ²)
    pub test_statistic: f64,
    /// Degrees of freedom
    pub degrees_of_freedom: DegreesOfFreedom,
    /// Critical value the statistic was compared against
    pub critical_value: f64,
    /// p-value (exact mode only)
    pub p_value: Option<f64>,
    /// Significance level used
    pub alpha: SignificanceLevel,
    pub decision: Decision,
    /// Test-specific restatement of the decision
    pub conclusion: String,
    pub warnings: Vec<Warning>,
}

impl StatisticalResult {
    /// Whether the statistic is NaN or infinite
    pub fn is_degenerate(&self) -> bool {
        !self.test_statistic.is_finite()
    }
}
