//! Schema orchestration
//!
//! [`SchemaValidator`] keeps field specs keyed by name, one namespace per
//! field kind, and collects every failure into a single
//! [`ValidationError`](crate::foundation::ValidationError) report.
//! [`ModelValidator`] is a declarative front end over the same registry.

mod model;
mod validator;

pub use model::ModelValidator;
pub use validator::SchemaValidator;
