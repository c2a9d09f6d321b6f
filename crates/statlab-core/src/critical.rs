//! Critical value lookups
//!
//! The classroom tables are deliberately coarse: a handful of t rows, a
//! three-step F rule and six chi-square rows, each with a fixed fallback.
//! Exact quantiles from `statrs` are available as a separate mode.

use log::{debug, trace};
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

use crate::errors::{StatsError, StatsResult};
use crate::types::LookupMiss;

/// Two-tailed Student's t critical values: (df, α = 0.05, α = 0.01)
const T_TABLE: [(usize, f64, f64); 9] = [
    (1, 12.706, 63.657),
    (2, 4.303, 9.925),
    (3, 3.182, 5.841),
    (4, 2.776, 4.604),
    (5, 2.571, 4.032),
    (10, 2.228, 3.169),
    (15, 2.131, 2.947),
    (20, 2.086, 2.845),
    (30, 2.042, 2.750),
];

/// Upper-tail chi-square critical values: (df, α = 0.05, α = 0.01)
const CHI_SQUARE_TABLE: [(usize, f64, f64); 6] = [
    (1, 3.841, 6.635),
    (2, 5.991, 9.210),
    (3, 7.815, 11.345),
    (4, 9.488, 13.277),
    (5, 11.070, 15.086),
    (6, 12.592, 16.812),
];

/// Normal approximation used when a t cell is missing
pub const T_FALLBACK: f64 = 1.96;
/// F value for any α other than 0.05
pub const F_FALLBACK: f64 = 2.00;
/// The df = 1, α = 0.05 chi-square cell, used for every miss
pub const CHI_SQUARE_FALLBACK: f64 = 3.841;

/// A table value and, when a fallback rule fired, which one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalValue {
    pub value: f64,
    pub miss: Option<LookupMiss>,
}

impl CriticalValue {
    fn exact(value: f64) -> Self {
        Self { value, miss: None }
    }

    fn fallback(value: f64, miss: LookupMiss) -> Self {
        debug!("critical value lookup fell back to {}: {:?}", value, miss);
        Self {
            value,
            miss: Some(miss),
        }
    }
}

fn alpha_column(row: &(usize, f64, f64), alpha: f64) -> Option<f64> {
    if alpha == 0.05 {
        Some(row.1)
    } else if alpha == 0.01 {
        Some(row.2)
    } else {
        None
    }
}

/// t lookup: smallest tabulated df ≥ `df`, else the df = 30 row
pub fn lookup_t(df: usize, alpha: f64) -> CriticalValue {
    let (row, above) = match T_TABLE.iter().find(|row| df <= row.0) {
        Some(row) => (row, false),
        None => (&T_TABLE[T_TABLE.len() - 1], true),
    };

    let found = match alpha_column(row, alpha) {
        Some(value) if above => CriticalValue::fallback(
            value,
            LookupMiss::DfAboveTable {
                requested: df,
                used: row.0,
            },
        ),
        Some(value) => CriticalValue::exact(value),
        None => CriticalValue::fallback(T_FALLBACK, LookupMiss::UnmappedAlpha { alpha }),
    };
    trace!("t critical df={} alpha={} -> {}", df, alpha, found.value);
    found
}

/// F lookup. Only the denominator df matters, and only at α = 0.05.
pub fn lookup_f(_df1: usize, df2: usize, alpha: f64) -> CriticalValue {
    let found = if alpha == 0.05 {
        let value = if df2 >= 30 {
            2.42
        } else if df2 >= 15 {
            2.49
        } else {
            3.00
        };
        CriticalValue::exact(value)
    } else {
        CriticalValue::fallback(F_FALLBACK, LookupMiss::UnmappedAlpha { alpha })
    };
    trace!("F critical df2={} alpha={} -> {}", df2, alpha, found.value);
    found
}

/// Chi-square lookup for df 1..=6; anything else gets [`CHI_SQUARE_FALLBACK`]
pub fn lookup_chi_square(df: usize, alpha: f64) -> CriticalValue {
    let found = match CHI_SQUARE_TABLE.iter().find(|row| row.0 == df) {
        Some(row) => match alpha_column(row, alpha) {
            Some(value) => CriticalValue::exact(value),
            None => CriticalValue::fallback(
                CHI_SQUARE_FALLBACK,
                LookupMiss::UnmappedAlpha { alpha },
            ),
        },
        None => CriticalValue::fallback(
            CHI_SQUARE_FALLBACK,
            LookupMiss::DfOutsideTable { requested: df },
        ),
    };
    trace!("chi-square critical df={} alpha={} -> {}", df, alpha, found.value);
    found
}

pub fn t_critical(df: usize, alpha: f64) -> f64 {
    lookup_t(df, alpha).value
}

pub fn f_critical(df1: usize, df2: usize, alpha: f64) -> f64 {
    lookup_f(df1, df2, alpha).value
}

pub fn chi_square_critical(df: usize, alpha: f64) -> f64 {
    lookup_chi_square(df, alpha).value
}

// ============================================================================
// Exact mode
// ============================================================================

fn students_t(df: usize) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df as f64).map_err(|e| StatsError::Distribution(e.to_string()))
}

fn fisher_snedecor(df1: usize, df2: usize) -> StatsResult<FisherSnedecor> {
    FisherSnedecor::new(df1 as f64, df2 as f64).map_err(|e| StatsError::Distribution(e.to_string()))
}

fn chi_squared(df: usize) -> StatsResult<ChiSquared> {
    ChiSquared::new(df as f64).map_err(|e| StatsError::Distribution(e.to_string()))
}

/// Two-tailed t quantile at 1 - α/2
pub fn exact_t_critical(df: usize, alpha: f64) -> StatsResult<f64> {
    Ok(students_t(df)?.inverse_cdf(1.0 - alpha / 2.0))
}

/// Upper-tail F quantile at 1 - α
pub fn exact_f_critical(df1: usize, df2: usize, alpha: f64) -> StatsResult<f64> {
    Ok(fisher_snedecor(df1, df2)?.inverse_cdf(1.0 - alpha))
}

/// Upper-tail chi-square quantile at 1 - α
pub fn exact_chi_square_critical(df: usize, alpha: f64) -> StatsResult<f64> {
    Ok(chi_squared(df)?.inverse_cdf(1.0 - alpha))
}

/// 1 - F(x), with non-finite statistics resolved without calling into the CDF
///
/// NaN has no p-value and yields NaN.
fn upper_tail(statistic: f64, cdf: impl Fn(f64) -> f64) -> f64 {
    if statistic.is_nan() {
        f64::NAN
    } else if statistic == f64::INFINITY {
        0.0
    } else if statistic == f64::NEG_INFINITY {
        1.0
    } else {
        1.0 - cdf(statistic)
    }
}

/// Two-tailed p-value for a t statistic
pub fn t_p_value(statistic: f64, df: usize) -> StatsResult<f64> {
    let dist = students_t(df)?;
    Ok(2.0 * upper_tail(statistic.abs(), |x| dist.cdf(x)))
}

/// Upper-tail p-value for an F statistic
pub fn f_p_value(statistic: f64, df1: usize, df2: usize) -> StatsResult<f64> {
    let dist = fisher_snedecor(df1, df2)?;
    Ok(upper_tail(statistic, |x| dist.cdf(x)))
}

/// Upper-tail p-value for a chi-square statistic
pub fn chi_square_p_value(statistic: f64, df: usize) -> StatsResult<f64> {
    let dist = chi_squared(df)?;
    Ok(upper_tail(statistic, |x| dist.cdf(x)))
}
