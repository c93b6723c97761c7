//! Built-in atomic validators
//!
//! Each constraint kind exists in three shapes:
//!
//! - a reusable value implementing [`Constraint`](crate::foundation::Constraint)
//!   (`MinLength`, `Email`, `IntMin`, ...), built by a factory function
//!   (`min_length(3)`, `email()`, `int_min(18)`);
//! - a free `check_*` function in [`check`] returning `Option<FieldError>`;
//! - a free `assert_*` function in [`assert`] returning
//!   `Result<(), ValidationFault>`.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::foundation::Constraint;
//! use formcheck_validator::validators::{alphanumeric, min_length};
//!
//! assert!(min_length(3).check("username", "jo").is_some());
//! assert!(alphanumeric().check("username", "jo-").is_some());
//! ```

// String validators
pub mod content;
pub mod length;
pub mod pattern;
pub mod set;

// Numeric validators
pub mod range;

// Free-function surfaces
pub mod assert;
pub mod check;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{LengthMode, MaxLength, MinLength, Required, max_length, min_length, required};

pub use content::{Email, Url, email, url};

pub use pattern::{Alpha, Alphanumeric, Numeric, alpha, alphanumeric, numeric};

pub use set::{OneOf, one_of};

pub use range::{FloatMax, FloatMin, IntMax, IntMin, float_max, float_min, int_max, int_min};
