//! Name-keyed schema of field specs with a cumulative error report.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::fields::{FieldSpec, FloatField, IntField, StringField};
use crate::foundation::{ValidationError, ValidationFault, ValidationResult};

/// Runs registered field specs and accumulates their errors.
///
/// Fields with no registration are treated as unconstrained: validating
/// them always succeeds and records nothing, so a schema may describe only
/// part of its input.
///
/// The error report is cumulative. [`is_valid`](Self::is_valid) reflects
/// every `validate_*` call since the last [`reset`](Self::reset), which
/// clears the report but keeps the registrations so one schema can serve
/// many independent sessions.
///
/// # Examples
///
/// ```
/// use formcheck_validator::fields::{IntField, StringField};
/// use formcheck_validator::schema::SchemaValidator;
///
/// let mut schema = SchemaValidator::new();
/// schema
///     .add_string_field(StringField::new("email").required().email())
///     .add_int_field(IntField::new("age").gte(18));
///
/// assert!(!schema.validate_string("email", "not-an-email"));
/// assert!(schema.validate_int("age", 30));
/// assert!(!schema.is_valid());
/// assert_eq!(schema.errors().count(), 1);
///
/// schema.reset();
/// assert!(schema.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    string_fields: HashMap<String, StringField>,
    int_fields: HashMap<String, IntField>,
    float_fields: HashMap<String, FloatField>,
    errors: ValidationError,
}

impl SchemaValidator {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a string field, replacing any string field of the same name.
    pub fn add_string_field(&mut self, field: StringField) -> &mut Self {
        register(&mut self.string_fields, field, "string");
        self
    }

    /// Registers an integer field, replacing any integer field of the same name.
    pub fn add_int_field(&mut self, field: IntField) -> &mut Self {
        register(&mut self.int_fields, field, "int");
        self
    }

    /// Registers a float field, replacing any float field of the same name.
    pub fn add_float_field(&mut self, field: FloatField) -> &mut Self {
        register(&mut self.float_fields, field, "float");
        self
    }

    /// Validates `value` against the string field `name`.
    ///
    /// Returns false if the field produced errors; they are appended to
    /// the cumulative report.
    pub fn validate_string(&mut self, name: &str, value: &str) -> bool {
        let outcome = self.string_fields.get(name).map(|field| field.validate(value));
        self.record(name, outcome)
    }

    /// Validates `value` against the integer field `name`.
    ///
    /// `None` means the value was not supplied.
    pub fn validate_int(&mut self, name: &str, value: impl Into<Option<i64>>) -> bool {
        let outcome = self.int_fields.get(name).map(|field| field.validate(value));
        self.record(name, outcome)
    }

    /// Validates `value` against the float field `name`.
    ///
    /// `None` means the value was not supplied.
    pub fn validate_float(&mut self, name: &str, value: impl Into<Option<f64>>) -> bool {
        let outcome = self.float_fields.get(name).map(|field| field.validate(value));
        self.record(name, outcome)
    }

    /// Returns true if no call since the last reset produced an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.errors.has_errors()
    }

    /// Returns the cumulative error report.
    #[must_use]
    pub fn errors(&self) -> &ValidationError {
        &self.errors
    }

    /// Takes the cumulative report, leaving an empty one behind.
    pub fn take_errors(&mut self) -> ValidationError {
        std::mem::take(&mut self.errors)
    }

    /// Clears the cumulative report. Registrations are kept.
    pub fn reset(&mut self) {
        debug!(cleared = self.errors.count(), "resetting schema errors");
        self.errors.clear();
    }

    /// Consumes the schema, returning `Ok(())` if the session is valid,
    /// otherwise the report.
    pub fn into_result(self) -> ValidationResult<()> {
        self.errors.into_result()
    }

    /// Raises the cumulative report as a [`ValidationFault`].
    pub fn ensure_valid(&self) -> Result<(), ValidationFault> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFault::Schema(self.errors.clone()))
        }
    }

    /// Returns true if any field kind is registered under `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.string_fields.contains_key(name)
            || self.int_fields.contains_key(name)
            || self.float_fields.contains_key(name)
    }

    /// Returns the total number of registered fields across all kinds.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.string_fields.len() + self.int_fields.len() + self.float_fields.len()
    }

    /// Returns the string field registered under `name`.
    #[must_use]
    pub fn string_field(&self, name: &str) -> Option<&StringField> {
        self.string_fields.get(name)
    }

    /// Returns the integer field registered under `name`.
    #[must_use]
    pub fn int_field(&self, name: &str) -> Option<&IntField> {
        self.int_fields.get(name)
    }

    /// Returns the float field registered under `name`.
    #[must_use]
    pub fn float_field(&self, name: &str) -> Option<&FloatField> {
        self.float_fields.get(name)
    }

    fn record(&mut self, name: &str, outcome: Option<ValidationError>) -> bool {
        let Some(errors) = outcome else {
            trace!(field = name, "no field registered, accepting value");
            return true;
        };

        if errors.is_empty() {
            trace!(field = name, "field passed");
            return true;
        }

        debug!(field = name, errors = errors.count(), "field failed validation");
        self.errors.merge(errors);
        false
    }
}

fn register<F: FieldSpec>(registry: &mut HashMap<String, F>, field: F, kind: &'static str) {
    let name = field.name().to_owned();
    let replaced = registry.insert(name.clone(), field).is_some();
    debug!(field = %name, kind, replaced, fields = registry.len(), "registered field");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_schema() -> SchemaValidator {
        let mut schema = SchemaValidator::new();
        schema
            .add_string_field(
                StringField::new("username")
                    .required()
                    .min_length(3)
                    .max_length(20)
                    .alphanumeric(),
            )
            .add_string_field(StringField::new("email").required().email())
            .add_int_field(IntField::new("age").gte(18).lte(120))
            .add_float_field(FloatField::new("score").between(0.0, 1.0));
        schema
    }

    #[test]
    fn test_unregistered_field_passes_without_recording() {
        let mut schema = signup_schema();
        assert!(schema.validate_string("nickname", "???"));
        assert!(schema.validate_int("nickname", -1));
        assert!(schema.validate_float("nickname", f64::NAN));
        assert!(schema.is_valid());
        assert_eq!(schema.errors().count(), 0);
    }

    #[test]
    fn test_errors_accumulate_across_calls() {
        let mut schema = signup_schema();
        assert!(!schema.validate_string("username", "jo-"));
        assert!(schema.validate_string("email", "user@example.com"));
        assert!(!schema.validate_int("age", 15));
        assert!(schema.validate_float("score", 0.5));

        assert!(!schema.is_valid());
        let fields: Vec<_> = schema.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["username", "age"]);
    }

    #[test]
    fn test_is_valid_is_cumulative_not_per_call() {
        let mut schema = signup_schema();
        assert!(!schema.validate_int("age", 200));
        assert!(schema.validate_int("age", 30));
        assert!(!schema.is_valid());
    }

    #[test]
    fn test_reset_keeps_registrations() {
        let mut schema = signup_schema();
        schema.validate_string("email", "");
        assert_eq!(schema.errors().count(), 1);

        schema.reset();
        assert_eq!(schema.errors().count(), 0);
        assert_eq!(schema.field_count(), 4);

        assert!(!schema.validate_string("email", "nope"));
        assert_eq!(
            schema.errors().first_error(),
            "email: must be a valid email address (got: nope)"
        );
    }

    #[test]
    fn test_last_registration_wins() {
        let mut schema = SchemaValidator::new();
        schema
            .add_string_field(StringField::new("code").numeric())
            .add_string_field(StringField::new("code").alpha());

        assert_eq!(schema.field_count(), 1);
        assert!(schema.validate_string("code", "abc"));
        assert!(!schema.validate_string("code", "123"));
    }

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let mut schema = SchemaValidator::new();
        schema
            .add_string_field(StringField::new("value").required())
            .add_int_field(IntField::new("value").positive());

        assert_eq!(schema.field_count(), 2);
        assert!(schema.has_field("value"));
        assert!(!schema.validate_int("value", 0));
        assert!(!schema.validate_string("value", ""));
        assert_eq!(schema.errors().count(), 2);
    }

    #[test]
    fn test_take_errors_and_result_conversions() {
        let mut schema = signup_schema();
        assert!(schema.clone().into_result().is_ok());
        assert!(schema.ensure_valid().is_ok());

        schema.validate_int("age", None);
        assert!(schema.is_valid());

        schema.validate_float("score", 1.5);
        let fault = schema.ensure_valid().unwrap_err();
        assert_eq!(fault.message(), "must be less than or equal to 1");

        assert_eq!(schema.clone().into_result().unwrap_err().count(), 1);

        let taken = schema.take_errors();
        assert_eq!(taken.count(), 1);
        assert!(schema.is_valid());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_registration_event_names_the_field() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut schema = SchemaValidator::new();
            schema
                .add_string_field(StringField::new("email").required())
                .add_string_field(StringField::new("email").email());
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let events: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("registered field"))
            .collect();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|line| line.contains("field=email")));
        assert!(events[1].contains("replaced=true"));
    }

    #[test]
    fn test_schemas_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaValidator>();
        assert_send_sync::<crate::schema::ModelValidator>();
    }

    #[test]
    fn test_field_lookup() {
        let schema = signup_schema();
        assert!(schema.string_field("username").is_some_and(StringField::is_required));
        assert_eq!(schema.int_field("age").and_then(IntField::min), Some(18));
        assert!(schema.float_field("age").is_none());
    }
}
