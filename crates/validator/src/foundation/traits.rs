//! Core traits for the validation system
//!
//! Every atomic validator implements [`Constraint`]: a pure predicate over a
//! single input that either passes or produces exactly one [`FieldError`]
//! attributed to the field being checked.

use crate::foundation::{FieldError, ValidationFault};

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A single rule that can be checked against one value.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{Constraint, FieldError};
///
/// struct NoSpaces;
///
/// impl Constraint for NoSpaces {
///     type Input = str;
///
///     fn check(&self, field: &str, input: &str) -> Option<FieldError> {
///         input.contains(' ').then(|| {
///             FieldError::new(field.to_owned(), "must not contain spaces")
///                 .with_value(input.to_owned())
///         })
///     }
/// }
///
/// assert!(NoSpaces.check("login", "alice").is_none());
/// assert!(NoSpaces.check("login", "al ice").is_some());
/// ```
pub trait Constraint {
    /// The type of input being checked.
    ///
    /// Use `?Sized` to allow unsized inputs like `str`.
    type Input: ?Sized;

    /// Checks `input`, returning the violation if there is one.
    fn check(&self, field: &str, input: &Self::Input) -> Option<FieldError>;

    /// Checks `input` and raises the violation as a [`ValidationFault`].
    ///
    /// The fault carries the same error `check` would have returned.
    fn enforce(&self, field: &str, input: &Self::Input) -> Result<(), ValidationFault> {
        match self.check(field, input) {
            Some(error) => Err(ValidationFault::Field(error)),
            None => Ok(()),
        }
    }

    /// Returns true if `input` satisfies the constraint.
    fn is_satisfied_by(&self, input: &Self::Input) -> bool {
        self.check("", input).is_none()
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    type Input = C::Input;

    fn check(&self, field: &str, input: &Self::Input) -> Option<FieldError> {
        (**self).check(field, input)
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    type Input = C::Input;

    fn check(&self, field: &str, input: &Self::Input) -> Option<FieldError> {
        (**self).check(field, input)
    }
}
