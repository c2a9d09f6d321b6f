//! Calculation narrative
//!
//! Steps always open with the formula. Numbers in the narrative are rounded
//! for display only; results keep full precision.

use crate::types::CalculationStep;

/// Fixed-point rendering that spells out non-finite values
pub fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Four decimal places, the precision of every narrative line
pub fn fixed4(value: f64) -> String {
    fixed(value, 4)
}

/// `[a, b, c]` with each value rendered by `render`
pub fn bracketed<F>(values: &[f64], render: F) -> String
where
    F: Fn(f64) -> String,
{
    let items: Vec<String> = values.iter().map(|&v| render(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Shortest plain rendering, as entered by the user (`10`, `22.5`)
pub fn plain(value: f64) -> String {
    format!("{}", value)
}

/// Builder for the ordered `{label, result}` sequence
#[derive(Debug, Clone, Default)]
pub struct StepBuilder {
    steps: Vec<CalculationStep>,
}

impl StepBuilder {
    pub fn formula(formula: &str) -> Self {
        Self::default().step("Formula", formula)
    }

    pub fn step(mut self, label: &str, result: impl Into<String>) -> Self {
        self.steps.push(CalculationStep {
            label: label.to_string(),
            result: result.into(),
        });
        self
    }

    pub fn build(self) -> Vec<CalculationStep> {
        self.steps
    }
}
