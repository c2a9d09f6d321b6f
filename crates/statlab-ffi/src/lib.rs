//! C FFI boundary for statlab
//!
//! This crate provides C-compatible functions for presentation layers that
//! cannot link Rust directly. "No result" is reported as `false` with
//! `ErrorCode::NotComputed`.

mod types;

pub use types::*;

use std::ffi::CStr;

use libc::c_char;
use log::debug;
use statlab_core::critical::{chi_square_critical, f_critical, t_critical};
use statlab_core::tests::{
    try_chi_square_goodness_of_fit, try_f_test, try_independent_t_test, try_one_sample_t_test,
    try_paired_t_test,
};
use statlab_core::{
    evaluate_json, CriticalValueMode, SignificanceLevel, StatisticalResult, StatsResult,
    TestOptions,
};

/// Helper to allocate and copy a string
unsafe fn alloc_string(s: &str) -> *mut c_char {
    let len = s.len() + 1;
    let ptr = libc::malloc(len) as *mut c_char;
    if !ptr.is_null() {
        std::ptr::copy_nonoverlapping(s.as_ptr(), ptr as *mut u8, s.len());
        *ptr.add(s.len()) = 0;
    }
    ptr
}

fn to_options(options: TestOptionsFFI) -> StatsResult<TestOptions> {
    Ok(TestOptions {
        alpha: SignificanceLevel::try_from(options.alpha)?,
        mode: if options.exact {
            CriticalValueMode::Exact
        } else {
            CriticalValueMode::Table
        },
    })
}

/// Shared body of the typed test entry points
///
/// # Safety
/// `out_result` and `out_error` must be valid pointers or NULL
unsafe fn run_test<F>(
    name: &str,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
    test: F,
) -> bool
where
    F: FnOnce(&TestOptions) -> StatsResult<StatisticalResult>,
{
    if !out_error.is_null() {
        *out_error = StatlabError::success();
    }

    if out_result.is_null() {
        if !out_error.is_null() {
            (*out_error).set(ErrorCode::InvalidInput, "out_result is NULL");
        }
        return false;
    }

    let opts = match to_options(options) {
        Ok(o) => o,
        Err(e) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::from(&e), &e.to_string());
            }
            return false;
        }
    };

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| test(&opts)));

    let result = match result {
        Ok(r) => r,
        Err(_) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::InternalError, &format!("Internal panic in {}", name));
            }
            return false;
        }
    };

    match result {
        Ok(r) => {
            let mut ffi = StatisticalResultFFI::numeric(&r);
            match serde_json::to_string(&r) {
                Ok(json) => ffi.details_json = alloc_string(&json),
                Err(e) => debug!("{}: result details not serialized: {}", name, e),
            }
            *out_result = ffi;
            true
        }
        Err(e) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::from(&e), &e.to_string());
            }
            false
        }
    }
}

// ============================================================================
// Critical value tables
// ============================================================================

/// Classroom t table (two-tailed)
#[no_mangle]
pub extern "C" fn statlab_t_critical(df: usize, alpha: f64) -> f64 {
    t_critical(df, alpha)
}

/// Classroom F table (denominator df only)
#[no_mangle]
pub extern "C" fn statlab_f_critical(df1: usize, df2: usize, alpha: f64) -> f64 {
    f_critical(df1, df2, alpha)
}

/// Classroom chi-square table (df 1..=6)
#[no_mangle]
pub extern "C" fn statlab_chi_square_critical(df: usize, alpha: f64) -> f64 {
    chi_square_critical(df, alpha)
}

// ============================================================================
// Hypothesis tests
// ============================================================================

/// One-sample t-test
///
/// # Safety
/// - `sample` must be a valid DataArray
/// - `out_result` must be a valid pointer
/// - `out_error` must be a valid pointer or NULL
///
/// A NaN `population_mean` means "not supplied".
#[no_mangle]
pub unsafe extern "C" fn statlab_one_sample_t(
    sample: DataArray,
    population_mean: f64,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
) -> bool {
    let values = sample.to_sample();
    let mu0 = Some(population_mean).filter(|m| m.is_finite());
    run_test("one-sample t-test", options, out_result, out_error, |opts| {
        try_one_sample_t_test(&values, mu0, opts)
    })
}

/// Independent two-sample t-test
///
/// # Safety
/// - `sample1` and `sample2` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` must be a valid pointer or NULL
#[no_mangle]
pub unsafe extern "C" fn statlab_independent_t(
    sample1: DataArray,
    sample2: DataArray,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
) -> bool {
    let s1 = sample1.to_sample();
    let s2 = sample2.to_sample();
    run_test("independent t-test", options, out_result, out_error, |opts| {
        try_independent_t_test(&s1, &s2, opts)
    })
}

/// Paired t-test
///
/// # Safety
/// - `before` and `after` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` must be a valid pointer or NULL
#[no_mangle]
pub unsafe extern "C" fn statlab_paired_t(
    before: DataArray,
    after: DataArray,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
) -> bool {
    let b = before.to_sample();
    let a = after.to_sample();
    run_test("paired t-test", options, out_result, out_error, |opts| {
        try_paired_t_test(&b, &a, opts)
    })
}

/// F-test for equality of variances
///
/// # Safety
/// - `sample1` and `sample2` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` must be a valid pointer or NULL
#[no_mangle]
pub unsafe extern "C" fn statlab_f_test(
    sample1: DataArray,
    sample2: DataArray,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
) -> bool {
    let s1 = sample1.to_sample();
    let s2 = sample2.to_sample();
    run_test("F-test", options, out_result, out_error, |opts| {
        try_f_test(&s1, &s2, opts)
    })
}

/// Chi-square goodness-of-fit test
///
/// # Safety
/// - `observed` and `expected` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` must be a valid pointer or NULL
#[no_mangle]
pub unsafe extern "C" fn statlab_chi_square_gof(
    observed: DataArray,
    expected: DataArray,
    options: TestOptionsFFI,
    out_result: *mut StatisticalResultFFI,
    out_error: *mut StatlabError,
) -> bool {
    let o = observed.to_sample();
    let e = expected.to_sample();
    run_test("chi-square goodness-of-fit", options, out_result, out_error, |opts| {
        try_chi_square_goodness_of_fit(&o, &e, opts)
    })
}

/// Runs a JSON request envelope and returns the result as JSON
///
/// # Safety
/// - `request_json` must be a valid NUL-terminated string
/// - `out_json` must be a valid pointer; on success it receives a string to
///   release with `statlab_free_string`
/// - `out_error` must be a valid pointer or NULL
#[no_mangle]
pub unsafe extern "C" fn statlab_evaluate_json(
    request_json: *const c_char,
    out_json: *mut *mut c_char,
    out_error: *mut StatlabError,
) -> bool {
    if !out_error.is_null() {
        *out_error = StatlabError::success();
    }

    if request_json.is_null() || out_json.is_null() {
        if !out_error.is_null() {
            (*out_error).set(ErrorCode::InvalidInput, "request_json or out_json is NULL");
        }
        return false;
    }

    let request = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::InvalidInput, "request_json is not valid UTF-8");
            }
            return false;
        }
    };

    let result = std::panic::catch_unwind(|| evaluate_json(request));

    match result {
        Ok(Ok(json)) => {
            *out_json = alloc_string(&json);
            true
        }
        Ok(Err(e)) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::from(&e), &e.to_string());
            }
            false
        }
        Err(_) => {
            if !out_error.is_null() {
                (*out_error).set(ErrorCode::InternalError, "Internal panic in evaluate");
            }
            false
        }
    }
}

/// Free memory allocated inside a test result
///
/// # Safety
/// - `result` must be NULL or a valid pointer to a StatisticalResultFFI
#[no_mangle]
pub unsafe extern "C" fn statlab_free_result(result: *mut StatisticalResultFFI) {
    if result.is_null() {
        return;
    }
    if !(*result).details_json.is_null() {
        libc::free((*result).details_json as *mut libc::c_void);
        (*result).details_json = std::ptr::null_mut();
    }
}

/// Free a string returned by `statlab_evaluate_json`
///
/// # Safety
/// - `s` must be NULL or a string allocated by this library
#[no_mangle]
pub unsafe extern "C" fn statlab_free_string(s: *mut c_char) {
    if !s.is_null() {
        libc::free(s as *mut libc::c_void);
    }
}

/// Library version as a static NUL-terminated string
#[no_mangle]
pub extern "C" fn statlab_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
