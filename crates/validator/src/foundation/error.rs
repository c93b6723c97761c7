//! Error types for validation failures
//!
//! [`FieldError`] describes a single violated constraint on a named field.
//! [`ValidationError`] is the ordered, append-only collection of those
//! violations that field specs and schemas hand back to callers.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single constraint violation on a named field.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::FieldError;
///
/// let error = FieldError::new("email", "must be a valid email address")
///     .with_value("not-an-email");
///
/// assert_eq!(
///     error.to_string(),
///     "email: must be a valid email address (got: not-an-email)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Name of the field that failed.
    pub field: Cow<'static, str>,

    /// Machine-readable error code.
    ///
    /// Examples: "required", "min_length", "email". Errors built by callers
    /// default to "custom".
    pub code: Cow<'static, str>,

    /// Human-readable description of the violation.
    pub message: Cow<'static, str>,

    /// Echo of the offending raw value; empty when not applicable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Cow<'static, str>,
}

impl FieldError {
    /// Creates a new field error with an empty value echo.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            code: Cow::Borrowed("custom"),
            message: message.into(),
            value: Cow::Borrowed(""),
        }
    }

    /// Sets the offending value echoed in the rendered error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the machine-readable code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending value, or `""`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if an offending value was recorded.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if !self.value.is_empty() {
            write!(f, " (got: {})", self.value)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of field errors.
///
/// Insertion order is detection order. Nothing is ever deduplicated: the
/// same field may appear several times when it violates several
/// constraints.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationError;
///
/// let mut errors = ValidationError::new();
/// assert_eq!(errors.to_string(), "No validation errors");
///
/// errors.add("username", "is required");
/// errors.add_with_value("age", "must be greater than or equal to 18", "15");
///
/// assert_eq!(errors.count(), 2);
/// assert_eq!(errors.first_error(), "username: is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error without a value echo.
    pub fn add(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    /// Appends an error that echoes the offending value.
    pub fn add_with_value(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.errors
            .push(FieldError::new(field, message).with_value(value));
        self
    }

    /// Appends an existing error.
    pub fn add_error(&mut self, error: FieldError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `other`, preserving its order.
    pub fn merge(&mut self, other: ValidationError) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Alias of [`count`](Self::count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Renders the earliest error, or returns an empty string.
    #[must_use]
    pub fn first_error(&self) -> String {
        self.errors
            .first()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Returns the earliest error.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Returns all errors in detection order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the errors recorded against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Iterates over the errors in detection order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Converts to a `Result`: `Ok(())` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the collection to a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        serde_json::Value::Array(
            self.errors
                .iter()
                .map(|e| {
                    json!({
                        "field": e.field,
                        "code": e.code,
                        "message": e.message,
                        "value": e.value,
                    })
                })
                .collect(),
        )
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<FieldError> for ValidationError {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldError> for ValidationError {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationError {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("No validation errors");
        }

        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
