//! C-compatible types for FFI boundary

use libc::c_char;
use statlab_core::{Decision, DegreesOfFreedom, StatisticalResult, StatsError};

/// Error codes for FFI boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    /// Inputs were incomplete; nothing was computed
    NotComputed = 1,
    InvalidInput = 2,
    InvalidSignificance = 3,
    DimensionMismatch = 4,
    SerializationError = 5,
    InternalError = 99,
}

impl From<&StatsError> for ErrorCode {
    fn from(err: &StatsError) -> Self {
        match err {
            StatsError::EmptyInput { .. }
            | StatsError::InsufficientDataMsg(_)
            | StatsError::MissingParameter(_) => ErrorCode::NotComputed,
            StatsError::DimensionMismatch { .. } | StatsError::DimensionMismatchMsg(_) => {
                ErrorCode::DimensionMismatch
            }
            StatsError::InvalidSignificance(_) | StatsError::UnparsedSignificance(_) => {
                ErrorCode::InvalidSignificance
            }
            StatsError::SerializationError(_) => ErrorCode::SerializationError,
            StatsError::Distribution(_) => ErrorCode::InternalError,
        }
    }
}

/// Error information for FFI
#[repr(C)]
pub struct StatlabError {
    pub code: ErrorCode,
    pub message: [c_char; 256],
}

impl StatlabError {
    pub fn success() -> Self {
        Self {
            code: ErrorCode::Success,
            message: [0; 256],
        }
    }

    pub fn set(&mut self, code: ErrorCode, msg: &str) {
        self.code = code;
        let bytes = msg.as_bytes();
        let len = bytes.len().min(255);
        for (i, &b) in bytes[..len].iter().enumerate() {
            self.message[i] = b as c_char;
        }
        self.message[len] = 0;
    }

    /// Message as a Rust string, up to the first NUL
    pub fn message(&self) -> String {
        let bytes: Vec<u8> = self
            .message
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Array of f64 values with validity mask for NULL handling
#[repr(C)]
pub struct DataArray {
    /// Pointer to data values
    pub data: *const f64,
    /// Validity bitmask: bit i is 1 if data[i] is valid, 0 if NULL
    /// Can be NULL if all values are valid
    pub validity: *const u8,
    /// Number of elements
    pub len: usize,
}

impl DataArray {
    /// Wraps a slice with every element valid
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.as_ptr(),
            validity: std::ptr::null(),
            len: values.len(),
        }
    }

    /// Check if index i is valid (not NULL)
    ///
    /// # Safety
    /// Caller must ensure index is within bounds
    pub unsafe fn is_valid(&self, i: usize) -> bool {
        if self.validity.is_null() {
            return true;
        }
        let byte_idx = i / 8;
        let bit_idx = i % 8;
        ((*self.validity.add(byte_idx)) >> bit_idx) & 1 == 1
    }

    /// Collect the valid, finite values; NULL and NaN cells are dropped
    ///
    /// # Safety
    /// Caller must ensure pointers are valid and len is correct
    pub unsafe fn to_sample(&self) -> Vec<f64> {
        if self.data.is_null() {
            return Vec::new();
        }
        let mut result = Vec::with_capacity(self.len);
        for i in 0..self.len {
            if self.is_valid(i) {
                let v = *self.data.add(i);
                if v.is_finite() {
                    result.push(v);
                }
            }
        }
        result
    }
}

/// Options for every test entry point
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TestOptionsFFI {
    /// 0.05 or 0.01
    pub alpha: f64,
    /// Use distribution quantiles instead of the classroom tables
    pub exact: bool,
}

impl Default for TestOptionsFFI {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            exact: false,
        }
    }
}

/// Test result for FFI
///
/// `details_json` holds the steps, conclusion and warnings and must be
/// released with `statlab_free_result`.
#[repr(C)]
pub struct StatisticalResultFFI {
    pub test_statistic: f64,
    /// First (or only) degrees of freedom
    pub df1: usize,
    /// Denominator degrees of freedom; 0 for single-df tests
    pub df2: usize,
    pub critical_value: f64,
    /// NaN unless exact mode was requested
    pub p_value: f64,
    pub reject: bool,
    pub degenerate: bool,
    pub details_json: *mut c_char,
}

impl Default for StatisticalResultFFI {
    fn default() -> Self {
        Self {
            test_statistic: f64::NAN,
            df1: 0,
            df2: 0,
            critical_value: f64::NAN,
            p_value: f64::NAN,
            reject: false,
            degenerate: false,
            details_json: std::ptr::null_mut(),
        }
    }
}

impl StatisticalResultFFI {
    /// Copies the numeric fields; `details_json` is left NULL
    pub fn numeric(result: &StatisticalResult) -> Self {
        let (df1, df2) = match result.degrees_of_freedom {
            DegreesOfFreedom::Single(df) => (df, 0),
            DegreesOfFreedom::Pair(df1, df2) => (df1, df2),
        };
        Self {
            test_statistic: result.test_statistic,
            df1,
            df2,
            critical_value: result.critical_value,
            p_value: result.p_value.unwrap_or(f64::NAN),
            reject: result.decision == Decision::Reject,
            degenerate: result.is_degenerate(),
            details_json: std::ptr::null_mut(),
        }
    }
}
