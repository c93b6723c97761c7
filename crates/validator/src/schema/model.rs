//! Declarative schema construction.

use std::borrow::Cow;

use crate::fields::{FloatField, IntField, StringField};
use crate::foundation::ValidationError;
use crate::schema::SchemaValidator;

/// Builds a [`SchemaValidator`] by naming fields and configuring them in place.
///
/// Each registration takes a closure that receives a fresh, unconstrained
/// field spec and returns the configured one. The result is registered
/// under the given name, replacing any earlier field of the same kind and
/// name.
///
/// ```
/// use formcheck_validator::schema::ModelValidator;
///
/// let mut model = ModelValidator::new();
/// model
///     .string("username", |f| f.required().min_length(3).alphanumeric())
///     .int("age", |f| f.gte(18));
///
/// assert!(!model.check_string("username", "ab"));
/// assert!(model.check_int("age", 21));
/// assert_eq!(model.errors().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelValidator {
    schema: SchemaValidator,
}

impl ModelValidator {
    /// Creates a model with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a string field.
    pub fn string(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        configure: impl FnOnce(StringField) -> StringField,
    ) -> &mut Self {
        self.schema.add_string_field(configure(StringField::new(name)));
        self
    }

    /// Declares an integer field.
    pub fn int(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        configure: impl FnOnce(IntField) -> IntField,
    ) -> &mut Self {
        self.schema.add_int_field(configure(IntField::new(name)));
        self
    }

    /// Declares a float field.
    pub fn float(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        configure: impl FnOnce(FloatField) -> FloatField,
    ) -> &mut Self {
        self.schema.add_float_field(configure(FloatField::new(name)));
        self
    }

    /// See [`SchemaValidator::validate_string`].
    pub fn check_string(&mut self, name: &str, value: &str) -> bool {
        self.schema.validate_string(name, value)
    }

    /// See [`SchemaValidator::validate_int`].
    pub fn check_int(&mut self, name: &str, value: impl Into<Option<i64>>) -> bool {
        self.schema.validate_int(name, value)
    }

    /// See [`SchemaValidator::validate_float`].
    pub fn check_float(&mut self, name: &str, value: impl Into<Option<f64>>) -> bool {
        self.schema.validate_float(name, value)
    }

    /// Returns true if no check since the last reset produced an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.schema.is_valid()
    }

    /// Returns the cumulative error report.
    #[must_use]
    pub fn errors(&self) -> &ValidationError {
        self.schema.errors()
    }

    /// Clears accumulated errors; declared fields are kept.
    pub fn reset(&mut self) {
        self.schema.reset();
    }

    /// Returns the underlying schema.
    #[must_use]
    pub fn schema(&self) -> &SchemaValidator {
        &self.schema
    }

    /// Consumes the model, returning the underlying schema.
    #[must_use]
    pub fn into_schema(self) -> SchemaValidator {
        self.schema
    }
}

impl From<ModelValidator> for SchemaValidator {
    fn from(model: ModelValidator) -> Self {
        model.schema
    }
}
