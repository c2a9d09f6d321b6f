//! Descriptive statistics
//!
//! Variance here is the population variance (divide by n). The t-tests and
//! F-test use it as their sample variance, so changing the divisor changes
//! every statistic the engine reports.

/// Arithmetic mean. NaN for an empty sample.
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Mean squared deviation from the mean (divisor n)
pub fn variance(sample: &[f64]) -> f64 {
    let m = mean(sample);
    let squared: Vec<f64> = sample.iter().map(|&x| (x - m).powi(2)).collect();
    mean(&squared)
}

/// Square root of [`variance`]
pub fn standard_deviation(sample: &[f64]) -> f64 {
    variance(sample).sqrt()
}

/// Summary of a single sample as shown in the calculation steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl SampleSummary {
    pub fn of(sample: &[f64]) -> Self {
        let variance = variance(sample);
        Self {
            n: sample.len(),
            mean: mean(sample),
            variance,
            std_dev: variance.sqrt(),
        }
    }
}
