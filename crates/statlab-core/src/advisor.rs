//! Research-design helpers
//!
//! Rule tables for choosing a test, classifying a variable's measurement
//! scale, and stating a null/alternative hypothesis pair.

use serde::{Deserialize, Serialize};

use crate::types::TestKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    /// Interval or ratio data
    Continuous,
    /// Nominal or ordinal data
    Categorical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupCount {
    One,
    Two,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchGoal {
    /// Compare a sample mean to a known population mean
    CompareToPopulationMean,
    CompareMeans,
    CompareVariances,
    TwoFactors,
    GoodnessOfFit,
    Independence,
    CompareProportions,
}

/// A suggested test and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub test: &'static str,
    pub reason: &'static str,
    /// The engine routine that runs it, if there is one
    pub kind: Option<TestKind>,
}

impl Recommendation {
    fn new(test: &'static str, reason: &'static str, kind: Option<TestKind>) -> Self {
        Self { test, reason, kind }
    }
}

/// Suggests a test for a design; `None` when no rule matches
pub fn recommend_test(
    data: DataType,
    groups: GroupCount,
    goal: ResearchGoal,
) -> Option<Recommendation> {
    use GroupCount::{Multiple, One, Two};
    use ResearchGoal::*;

    let rec = match (data, groups, goal) {
        (DataType::Continuous, One, CompareToPopulationMean) => Recommendation::new(
            "One-Sample t-Test",
            "Comparing sample mean to known population mean",
            Some(TestKind::OneSampleT),
        ),
        (DataType::Continuous, Two, CompareMeans) => Recommendation::new(
            "Independent Samples t-Test",
            "Comparing means of two independent groups",
            Some(TestKind::IndependentT),
        ),
        (DataType::Continuous, Two, CompareVariances) => Recommendation::new(
            "F-Test",
            "Comparing variances of two groups",
            Some(TestKind::FTest),
        ),
        (DataType::Continuous, Multiple, CompareMeans) => Recommendation::new(
            "One-Way ANOVA",
            "Comparing means across multiple groups",
            Some(TestKind::OneWayAnova),
        ),
        (DataType::Continuous, Multiple, TwoFactors) => Recommendation::new(
            "Two-Way ANOVA",
            "Testing effects of two factors simultaneously",
            None,
        ),
        (DataType::Continuous, Two, TwoFactors) => Recommendation::new(
            "Two-Way ANOVA",
            "Testing interaction effects between two factors with two groups each",
            None,
        ),
        (DataType::Continuous, One, CompareVariances) => Recommendation::new(
            "Chi-Square Test for Variance",
            "Testing if sample variance differs from population variance",
            None,
        ),
        (DataType::Categorical, _, GoodnessOfFit) => Recommendation::new(
            "Chi-Square Goodness of Fit",
            "Testing if sample fits expected distribution",
            Some(TestKind::ChiSquareGoodnessOfFit),
        ),
        (DataType::Categorical, _, Independence) => Recommendation::new(
            "Chi-Square Test of Independence",
            "Testing if two categorical variables are independent",
            Some(TestKind::ChiSquareIndependence),
        ),
        (DataType::Categorical, _, CompareProportions) => Recommendation::new(
            "Z-Test for Proportions",
            "Comparing sample proportion to population proportion",
            None,
        ),
        _ => return None,
    };
    Some(rec)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementScale {
    Nominal,
    Ordinal,
    Interval,
    Ratio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleClassification {
    pub scale: MeasurementScale,
    pub reason: &'static str,
}

/// Keyword rules, checked in order; the first hit wins
const SCALE_RULES: [(MeasurementScale, &[&str], &str); 4] = [
    (
        MeasurementScale::Nominal,
        &["gender", "color", "category", "type"],
        "Categories with no natural order",
    ),
    (
        MeasurementScale::Ordinal,
        &["rank", "grade", "satisfaction", "rating"],
        "Ordered categories with no equal intervals",
    ),
    (
        MeasurementScale::Interval,
        &["temperature", "iq", "score"],
        "Equal intervals but no true zero point",
    ),
    (
        MeasurementScale::Ratio,
        &["height", "weight", "age", "income", "price"],
        "Equal intervals with meaningful zero point",
    ),
];

/// Guesses the measurement scale from a free-text variable description
///
/// Matching is substring-based, so "average" hits the ratio keyword "age".
/// Blank input yields `None`; unmatched input defaults to nominal.
pub fn classify_scale(description: &str) -> Option<ScaleClassification> {
    if description.trim().is_empty() {
        return None;
    }
    let lower = description.to_lowercase();

    let found = SCALE_RULES
        .iter()
        .find(|(_, keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|&(scale, _, reason)| ScaleClassification { scale, reason });

    Some(found.unwrap_or(ScaleClassification {
        scale: MeasurementScale::Nominal,
        reason: "Default classification for categorical data",
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parameter {
    Mean,
    Proportion,
    Variance,
}

impl Parameter {
    pub fn symbol(self) -> &'static str {
        match self {
            Parameter::Mean => "μ",
            Parameter::Proportion => "p",
            Parameter::Variance => "σ²",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TwoTailed,
    Greater,
    Less,
}

impl Direction {
    fn operator(self) -> &'static str {
        match self {
            Direction::TwoTailed => "≠",
            Direction::Greater => ">",
            Direction::Less => "<",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HypothesisPair {
    pub null: String,
    pub alternative: String,
}

/// States H₀ and H₁ for a parameter and hypothesised value
pub fn build_hypotheses(
    parameter: Parameter,
    direction: Direction,
    value: &str,
) -> Option<HypothesisPair> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let symbol = parameter.symbol();
    Some(HypothesisPair {
        null: format!("H₀: {} = {}", symbol, value),
        alternative: format!("H₁: {} {} {}", symbol, direction.operator(), value),
    })
}
