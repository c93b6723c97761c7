//! Field constraint builders
//!
//! A field spec names one input field and records the constraints that
//! apply to it. Specs are built with consuming fluent setters, so every
//! call returns a new value and a spec that has been handed to a schema can
//! no longer be changed behind its back:
//!
//! ```
//! use formcheck_validator::fields::{IntField, StringField};
//!
//! let username = StringField::new("username")
//!     .required()
//!     .min_length(3)
//!     .max_length(20)
//!     .alphanumeric();
//!
//! assert_eq!(username.validate("jo-").count(), 1);
//!
//! let age = IntField::new("age").gte(18).lte(120);
//! assert!(age.validate(25).is_empty());
//! assert!(age.validate(None).is_empty());
//! ```
//!
//! # Evaluation order
//!
//! 1. A required field with no value (empty string, `None`) yields exactly
//!    one `is required` error and nothing else is checked.
//! 2. An optional field with no value passes without further checks.
//! 3. Every remaining constraint runs, in a fixed order, and every
//!    violation is reported.

mod float;
mod int;
mod string;

pub use float::FloatField;
pub use int::IntField;
pub use string::StringField;

use crate::foundation::ValidationError;

/// Common interface of the typed field specs.
///
/// Lets registries and generic helpers work with any field kind.
pub trait FieldSpec {
    /// The value this field validates.
    type Value: ?Sized;

    /// Returns the field name.
    fn name(&self) -> &str;

    /// Returns true if the field must be present.
    fn is_required(&self) -> bool;

    /// Validates `value`, returning every violation found.
    fn validate_value(&self, value: &Self::Value) -> ValidationError;
}

/// Appends `error` to `errors` if present.
#[inline]
pub(crate) fn push(errors: &mut ValidationError, error: Option<crate::foundation::FieldError>) {
    if let Some(error) = error {
        errors.add_error(error);
    }
}
