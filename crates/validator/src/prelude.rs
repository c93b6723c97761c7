//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that
//! brings in the error types, constraints, field specs and schemas.
//!
//! # Examples
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let username = StringField::new("username").required().min_length(3);
//! assert_eq!(username.validate("").first_error(), "username: is required");
//!
//! assert!(min_length(3).check("username", "jo").is_some());
//! assert!(check_email("email", "user@example.com").is_none());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Constraint, FieldError, ValidationError, ValidationFault, ValidationResult, check_all,
};

// ============================================================================
// VALIDATORS: Atomic constraints and free functions
// ============================================================================

pub use crate::validators::{
    Alpha, Alphanumeric, Email, FloatMax, FloatMin, IntMax, IntMin, LengthMode, MaxLength,
    MinLength, Numeric, OneOf, Required, Url, alpha, alphanumeric, email, float_max, float_min,
    int_max, int_min, max_length, min_length, numeric, one_of, required, url,
};

pub use crate::validators::assert::*;
pub use crate::validators::check::*;

// ============================================================================
// FIELDS AND SCHEMA
// ============================================================================

pub use crate::fields::{FieldSpec, FloatField, IntField, StringField};
pub use crate::schema::{ModelValidator, SchemaValidator};
