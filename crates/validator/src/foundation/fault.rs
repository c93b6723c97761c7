//! Fault type for fail-fast validation.
//!
//! The `assert_*` validators and [`SchemaValidator::ensure_valid`] report
//! failure through [`ValidationFault`] so callers can propagate it with `?`.
//! The wrapped errors render exactly as their result-based counterparts.
//!
//! [`SchemaValidator::ensure_valid`]: crate::schema::SchemaValidator::ensure_valid

use crate::foundation::{FieldError, ValidationError};

/// A validation failure raised as an error value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationFault {
    /// A single constraint on a single field failed.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// One or more fields of a schema failed.
    #[error(transparent)]
    Schema(#[from] ValidationError),
}

impl ValidationFault {
    /// Returns the message of the first underlying error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Field(error) => error.message(),
            Self::Schema(errors) => errors.first().map_or("", FieldError::message),
        }
    }

    /// Returns the underlying errors as a collection.
    #[must_use]
    pub fn into_errors(self) -> ValidationError {
        match self {
            Self::Field(error) => error.into(),
            Self::Schema(errors) => errors,
        }
    }
}
