//! Integer field spec

use std::borrow::Cow;

use crate::fields::{FieldSpec, push};
use crate::foundation::{Constraint, ValidationError};
use crate::validators::{IntMax, IntMin, required};

/// Constraints on an integer field.
///
/// Both bounds are stored inclusive. Exclusive setters fold the strictness
/// into the bound: `gt(v)` stores a minimum of `v + 1` and `lt(v)` a
/// maximum of `v - 1`. Bounds are held as `i128`, so `gt(i64::MAX)` and
/// `lt(i64::MIN)` reject every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntField {
    name: Cow<'static, str>,
    required: bool,
    min: Option<i128>,
    max: Option<i128>,
}

impl IntField {
    /// Creates an unconstrained integer field.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            required: false,
            min: None,
            max: None,
        }
    }

    /// Rejects an absent value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires `value > threshold`.
    pub fn gt(mut self, threshold: i64) -> Self {
        self.min = Some(i128::from(threshold) + 1);
        self
    }

    /// Requires `value >= threshold`.
    pub fn gte(mut self, threshold: i64) -> Self {
        self.min = Some(i128::from(threshold));
        self
    }

    /// Requires `value < threshold`.
    pub fn lt(mut self, threshold: i64) -> Self {
        self.max = Some(i128::from(threshold) - 1);
        self
    }

    /// Requires `value <= threshold`.
    pub fn lte(mut self, threshold: i64) -> Self {
        self.max = Some(i128::from(threshold));
        self
    }

    /// Requires `min <= value <= max`.
    pub fn between(self, min: i64, max: i64) -> Self {
        self.gte(min).lte(max)
    }

    /// Requires `value > 0`.
    pub fn positive(self) -> Self {
        self.gt(0)
    }

    /// Requires `value < 0`.
    pub fn negative(self) -> Self {
        self.lt(0)
    }

    /// Requires `value >= 0`.
    pub fn non_negative(self) -> Self {
        self.gte(0)
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if an absent value is rejected.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the inclusive lower bound, if set.
    #[must_use]
    pub fn min(&self) -> Option<i128> {
        self.min
    }

    /// Returns the inclusive upper bound, if set.
    #[must_use]
    pub fn max(&self) -> Option<i128> {
        self.max
    }

    /// Validates `value`; `None` means the value was not supplied.
    ///
    /// ```
    /// use formcheck_validator::fields::IntField;
    ///
    /// let age = IntField::new("age").required().gte(18);
    /// assert_eq!(age.validate(None).first_error(), "age: is required");
    /// assert_eq!(age.validate(Some(17)).count(), 1);
    /// assert!(age.validate(18).is_empty());
    /// ```
    #[must_use]
    pub fn validate(&self, value: impl Into<Option<i64>>) -> ValidationError {
        let mut errors = ValidationError::new();
        let field = self.name.as_ref();

        let Some(value) = value.into() else {
            if self.required {
                push(&mut errors, required().check(field, ""));
            }
            return errors;
        };

        if let Some(min) = self.min {
            push(&mut errors, IntMin { min }.check(field, &value));
        }
        if let Some(max) = self.max {
            push(&mut errors, IntMax { max }.check(field, &value));
        }

        errors
    }
}

impl FieldSpec for IntField {
    type Value = Option<i64>;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn validate_value(&self, value: &Option<i64>) -> ValidationError {
        self.validate(*value)
    }
}
