//! # formcheck-validator
//!
//! Declarative field constraints and schema validation with aggregated,
//! human-readable error reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_validator::prelude::*;
//!
//! let mut schema = SchemaValidator::new();
//! schema
//!     .add_string_field(StringField::new("username").required().min_length(3).alphanumeric())
//!     .add_int_field(IntField::new("age").gte(18).lte(120));
//!
//! schema.validate_string("username", "jo-");
//! schema.validate_int("age", 15);
//!
//! assert!(!schema.is_valid());
//! assert_eq!(schema.errors().count(), 2);
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: [`FieldError`](foundation::FieldError),
//!   [`ValidationError`](foundation::ValidationError), the fail-fast
//!   [`ValidationFault`](foundation::ValidationFault) and the
//!   [`Constraint`](foundation::Constraint) trait.
//! - [`validators`]: atomic constraints (`required`, `min_length`, `email`,
//!   `int_min`, ...) plus the free [`check`](validators::check) and
//!   [`assert`](validators::assert) function families.
//! - [`fields`]: typed field specs with fluent setters.
//! - [`schema`]: name-keyed orchestration with a cumulative report.
//!
//! ## Creating Constraints
//!
//! Use the [`constraint!`] macro for one-off rules, or implement
//! [`Constraint`](foundation::Constraint) manually.
//!
//! ## Logging
//!
//! Schema operations emit [`tracing`] events at `debug` and `trace` level.
//! Install any subscriber to see them; nothing is logged otherwise.

pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
