//! Fail-fast `assert_*` functions
//!
//! Each function wraps its [`check`](super::check) counterpart and raises
//! the same error as a [`ValidationFault`], so pass/fail decisions and
//! message text can never drift apart.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::foundation::ValidationFault;
//! use formcheck_validator::validators::assert::{assert_email, assert_required};
//!
//! fn register(email: &str) -> Result<(), ValidationFault> {
//!     assert_required("email", email)?;
//!     assert_email("email", email)?;
//!     Ok(())
//! }
//!
//! assert!(register("user@example.com").is_ok());
//! assert_eq!(
//!     register("nope").unwrap_err().message(),
//!     "must be a valid email address"
//! );
//! ```

use crate::foundation::{FieldError, ValidationFault};
use crate::validators::check;

#[inline]
fn raise(outcome: Option<FieldError>) -> Result<(), ValidationFault> {
    outcome.map_or(Ok(()), |error| Err(ValidationFault::Field(error)))
}

/// Raises if `value` is empty.
pub fn assert_required(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_required(field, value))
}

/// Raises if `value` has fewer than `min` characters.
pub fn assert_min_length(field: &str, value: &str, min: usize) -> Result<(), ValidationFault> {
    raise(check::check_min_length(field, value, min))
}

/// Raises if `value` has more than `max` characters.
pub fn assert_max_length(field: &str, value: &str, max: usize) -> Result<(), ValidationFault> {
    raise(check::check_max_length(field, value, max))
}

/// Raises unless `value` has the minimal shape of an email address.
pub fn assert_email(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_email(field, value))
}

/// Raises unless `value` starts with `http://` or `https://`.
pub fn assert_url(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_url(field, value))
}

/// Raises unless every character of `value` is an ASCII letter.
pub fn assert_alpha(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_alpha(field, value))
}

/// Raises unless every character of `value` is an ASCII letter or digit.
pub fn assert_alphanumeric(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_alphanumeric(field, value))
}

/// Raises unless every character of `value` is an ASCII digit.
pub fn assert_numeric(field: &str, value: &str) -> Result<(), ValidationFault> {
    raise(check::check_numeric(field, value))
}

/// Raises unless `value` exactly equals one of `allowed`.
pub fn assert_one_of<S: AsRef<str>>(
    field: &str,
    value: &str,
    allowed: &[S],
) -> Result<(), ValidationFault> {
    raise(check::check_one_of(field, value, allowed))
}

/// Raises unless `value > threshold`.
pub fn assert_int_gt(field: &str, value: i64, threshold: i64) -> Result<(), ValidationFault> {
    raise(check::check_int_gt(field, value, threshold))
}

/// Raises unless `value >= threshold`.
pub fn assert_int_gte(field: &str, value: i64, threshold: i64) -> Result<(), ValidationFault> {
    raise(check::check_int_gte(field, value, threshold))
}

/// Raises unless `value < threshold`.
pub fn assert_int_lt(field: &str, value: i64, threshold: i64) -> Result<(), ValidationFault> {
    raise(check::check_int_lt(field, value, threshold))
}

/// Raises unless `value <= threshold`.
pub fn assert_int_lte(field: &str, value: i64, threshold: i64) -> Result<(), ValidationFault> {
    raise(check::check_int_lte(field, value, threshold))
}

/// Raises unless `value > threshold`.
pub fn assert_float_gt(field: &str, value: f64, threshold: f64) -> Result<(), ValidationFault> {
    raise(check::check_float_gt(field, value, threshold))
}

/// Raises unless `value >= threshold`.
pub fn assert_float_gte(field: &str, value: f64, threshold: f64) -> Result<(), ValidationFault> {
    raise(check::check_float_gte(field, value, threshold))
}

/// Raises unless `value < threshold`.
pub fn assert_float_lt(field: &str, value: f64, threshold: f64) -> Result<(), ValidationFault> {
    raise(check::check_float_lt(field, value, threshold))
}

/// Raises unless `value <= threshold`.
pub fn assert_float_lte(field: &str, value: f64, threshold: f64) -> Result<(), ValidationFault> {
    raise(check::check_float_lte(field, value, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_matches_check_message() {
        let checked = check::check_min_length("password", "abc", 8).unwrap();
        let raised = assert_min_length("password", "abc", 8).unwrap_err();
        assert_eq!(raised.message(), checked.message());
        assert_eq!(raised.to_string(), checked.to_string());
    }

    #[test]
    fn test_assert_passes_silently() {
        assert!(assert_required("name", "x").is_ok());
        assert!(assert_url("site", "https://example.com").is_ok());
        assert!(assert_one_of("size", "S", &["S", "M"]).is_ok());
        assert!(assert_int_gte("age", 18, 18).is_ok());
        assert!(assert_float_lt("ratio", 0.9, 1.0).is_ok());
    }

    #[test]
    fn test_assert_raises() {
        assert!(assert_alpha("f", "a1").is_err());
        assert!(assert_numeric("f", "x").is_err());
        assert!(assert_alphanumeric("f", "a b").is_err());
        assert!(assert_max_length("f", "abcdef", 5).is_err());
        assert!(assert_int_gt("n", 1, 1).is_err());
        assert!(assert_int_lt("n", 1, 1).is_err());
        assert!(assert_int_lte("n", 2, 1).is_err());
        assert!(assert_float_gt("x", 1.0, 1.0).is_err());
        assert!(assert_float_gte("x", 0.9, 1.0).is_err());
        assert!(assert_float_lte("x", 1.1, 1.0).is_err());
    }
}
