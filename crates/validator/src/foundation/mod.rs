//! Core validation types and traits
//!
//! - **Traits**: [`Constraint`]
//! - **Errors**: [`FieldError`], [`ValidationError`], [`ValidationFault`]
//!
//! Everything else in the crate is built on these three pieces: atomic
//! validators implement `Constraint`, field specs collect the resulting
//! `FieldError`s into a `ValidationError`, and the fail-fast APIs wrap
//! either of them in a `ValidationFault`.

pub mod error;
pub mod fault;
pub mod traits;

pub use error::{FieldError, ValidationError};
pub use fault::ValidationFault;
pub use traits::Constraint;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every constraint against `input`, collecting all violations.
///
/// Constraints are evaluated in slice order and none of them short-circuits
/// the others.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{Constraint, check_all};
/// use formcheck_validator::validators::{alphanumeric, max_length};
///
/// let errors = check_all("username", "way-too-long-name", &[
///     &max_length(10) as &dyn Constraint<Input = str>,
///     &alphanumeric(),
/// ]);
/// assert_eq!(errors.count(), 2);
/// ```
pub fn check_all<C>(field: &str, input: &C::Input, constraints: &[&C]) -> ValidationError
where
    C: Constraint + ?Sized,
{
    constraints
        .iter()
        .filter_map(|constraint| constraint.check(field, input))
        .collect()
}

/// A validation result carrying every collected violation.
pub type ValidationResult<T> = Result<T, ValidationError>;
