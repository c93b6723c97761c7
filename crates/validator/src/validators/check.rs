//! Schema-less `check_*` functions
//!
//! One function per constraint kind, for ad-hoc validation of a single
//! value. Each returns `None` when the value passes and exactly one
//! [`FieldError`] when it does not. They never panic.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validators::check;
//!
//! assert!(check::check_email("email", "user@example.com").is_none());
//!
//! let error = check::check_min_length("password", "abc", 8).unwrap();
//! assert_eq!(error.to_string(), "password: must be at least 8 characters long (got: abc)");
//! ```

use crate::foundation::{Constraint, FieldError};
use crate::validators::{
    FloatMax, FloatMin, IntMax, IntMin, MaxLength, MinLength, OneOf, alpha, alphanumeric, email,
    numeric, required, url,
};

/// Fails iff `value` is empty.
#[must_use]
pub fn check_required(field: &str, value: &str) -> Option<FieldError> {
    required().check(field, value)
}

/// Fails iff `value` has fewer than `min` characters.
#[must_use]
pub fn check_min_length(field: &str, value: &str, min: usize) -> Option<FieldError> {
    MinLength::new(min).check(field, value)
}

/// Fails iff `value` has more than `max` characters.
#[must_use]
pub fn check_max_length(field: &str, value: &str, max: usize) -> Option<FieldError> {
    MaxLength::new(max).check(field, value)
}

/// Fails unless `value` has the minimal shape of an email address.
#[must_use]
pub fn check_email(field: &str, value: &str) -> Option<FieldError> {
    email().check(field, value)
}

/// Fails unless `value` starts with `http://` or `https://`.
#[must_use]
pub fn check_url(field: &str, value: &str) -> Option<FieldError> {
    url().check(field, value)
}

/// Fails unless every character of `value` is an ASCII letter.
#[must_use]
pub fn check_alpha(field: &str, value: &str) -> Option<FieldError> {
    alpha().check(field, value)
}

/// Fails unless every character of `value` is an ASCII letter or digit.
#[must_use]
pub fn check_alphanumeric(field: &str, value: &str) -> Option<FieldError> {
    alphanumeric().check(field, value)
}

/// Fails unless every character of `value` is an ASCII digit.
#[must_use]
pub fn check_numeric(field: &str, value: &str) -> Option<FieldError> {
    numeric().check(field, value)
}

/// Fails unless `value` exactly equals one of `allowed`.
#[must_use]
pub fn check_one_of<S: AsRef<str>>(field: &str, value: &str, allowed: &[S]) -> Option<FieldError> {
    OneOf::new(allowed.iter().map(AsRef::as_ref)).check(field, value)
}

// ============================================================================
// INTEGER COMPARISONS
// ============================================================================

/// Fails unless `value > threshold`.
///
/// Checked as `value >= threshold + 1`, so the message names the
/// translated inclusive bound.
#[must_use]
pub fn check_int_gt(field: &str, value: i64, threshold: i64) -> Option<FieldError> {
    IntMin {
        min: i128::from(threshold) + 1,
    }
    .check(field, &value)
}

/// Fails unless `value >= threshold`.
#[must_use]
pub fn check_int_gte(field: &str, value: i64, threshold: i64) -> Option<FieldError> {
    IntMin::new(threshold).check(field, &value)
}

/// Fails unless `value < threshold`.
///
/// Checked as `value <= threshold - 1`.
#[must_use]
pub fn check_int_lt(field: &str, value: i64, threshold: i64) -> Option<FieldError> {
    IntMax {
        max: i128::from(threshold) - 1,
    }
    .check(field, &value)
}

/// Fails unless `value <= threshold`.
#[must_use]
pub fn check_int_lte(field: &str, value: i64, threshold: i64) -> Option<FieldError> {
    IntMax::new(threshold).check(field, &value)
}

// ============================================================================
// FLOAT COMPARISONS
// ============================================================================

/// Fails unless `value > threshold`.
#[must_use]
pub fn check_float_gt(field: &str, value: f64, threshold: f64) -> Option<FieldError> {
    FloatMin::exclusive(threshold).check(field, &value)
}

/// Fails unless `value >= threshold`.
#[must_use]
pub fn check_float_gte(field: &str, value: f64, threshold: f64) -> Option<FieldError> {
    FloatMin::new(threshold).check(field, &value)
}

/// Fails unless `value < threshold`.
#[must_use]
pub fn check_float_lt(field: &str, value: f64, threshold: f64) -> Option<FieldError> {
    FloatMax::exclusive(threshold).check(field, &value)
}

/// Fails unless `value <= threshold`.
#[must_use]
pub fn check_float_lte(field: &str, value: f64, threshold: f64) -> Option<FieldError> {
    FloatMax::new(threshold).check(field, &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_checks() {
        assert!(check_required("name", "").is_some());
        assert!(check_required("name", "x").is_none());
        assert!(check_min_length("name", "ab", 3).is_some());
        assert!(check_max_length("name", "abcd", 3).is_some());
        assert!(check_email("email", "a@b.c").is_none());
        assert!(check_url("site", "www.example.com").is_some());
        assert!(check_alpha("f", "abc").is_none());
        assert!(check_alphanumeric("f", "abc!").is_some());
        assert!(check_numeric("f", "12a").is_some());
    }

    #[test]
    fn test_check_one_of_accepts_slices() {
        assert!(check_one_of("size", "M", &["S", "M", "L"]).is_none());
        let allowed = vec![String::from("S"), String::from("L")];
        let error = check_one_of("size", "M", &allowed).unwrap();
        assert_eq!(error.message(), "must be one of: S, L");
    }

    #[test]
    fn test_int_comparisons() {
        assert!(check_int_gt("n", 6, 5).is_none());
        assert_eq!(
            check_int_gt("n", 5, 5).unwrap().message(),
            "must be greater than or equal to 6"
        );
        assert!(check_int_gte("n", 5, 5).is_none());
        assert!(check_int_lt("n", 5, 5).is_some());
        assert!(check_int_lte("n", 5, 5).is_none());
    }

    #[test]
    fn test_int_strict_comparisons_at_extremes() {
        assert!(check_int_gt("n", i64::MAX, i64::MAX).is_some());
        assert!(check_int_lt("n", i64::MIN, i64::MIN).is_some());
        assert!(check_int_gt("n", i64::MAX, i64::MAX - 1).is_none());
        assert!(check_int_lt("n", i64::MIN, i64::MIN + 1).is_none());
    }

    #[test]
    fn test_float_comparisons() {
        assert!(check_float_gt("x", 0.5, 0.5).is_some());
        assert!(check_float_gte("x", 0.5, 0.5).is_none());
        assert!(check_float_lt("x", 0.5, 0.5).is_some());
        assert!(check_float_lte("x", 0.5, 0.5).is_none());
        assert!(check_float_gt("x", 0.500_1, 0.5).is_none());
    }
}
