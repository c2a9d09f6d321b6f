//! statlab-core: statistical computation layer for the research methodology course
//!
//! Descriptive statistics, classroom critical-value tables and the hypothesis
//! tests built on them (t, F, chi-square, one-way ANOVA). Every routine is a
//! pure function of its inputs; results carry a step-by-step narrative for
//! display.

pub mod advisor;
pub mod critical;
pub mod descriptive;
pub mod errors;
pub mod format;
pub mod parse;
pub mod presets;
pub mod request;
pub mod tests;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use request::{evaluate, evaluate_json, try_evaluate, TestRequest};
pub use types::*;
