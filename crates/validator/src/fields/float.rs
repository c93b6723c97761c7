//! Float field spec

use std::borrow::Cow;

use crate::fields::{FieldSpec, push};
use crate::foundation::{Constraint, ValidationError};
use crate::validators::{FloatMax, FloatMin, required};

/// Constraints on a floating-point field.
///
/// Thresholds are stored as given. `gt` and `lt` keep the same threshold
/// as `gte` and `lte` and only flip the bound to exclusive; there is no
/// `±1` translation as there is for [`IntField`](crate::fields::IntField).
#[derive(Debug, Clone, PartialEq)]
pub struct FloatField {
    name: Cow<'static, str>,
    required: bool,
    min: Option<FloatMin>,
    max: Option<FloatMax>,
}

impl FloatField {
    /// Creates an unconstrained float field.
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
    pub fn gt(mut self, threshold: f64) -> Self {
        self.min = Some(FloatMin::exclusive(threshold));
        self
    }

    /// Requires `value >= threshold`.
    pub fn gte(mut self, threshold: f64) -> Self {
        self.min = Some(FloatMin::new(threshold));
        self
    }

    /// Requires `value < threshold`.
    pub fn lt(mut self, threshold: f64) -> Self {
        self.max = Some(FloatMax::exclusive(threshold));
        self
    }

    /// Requires `value <= threshold`.
    pub fn lte(mut self, threshold: f64) -> Self {
        self.max = Some(FloatMax::new(threshold));
        self
    }

    /// Requires `min <= value <= max`.
    pub fn between(self, min: f64, max: f64) -> Self {
        self.gte(min).lte(max)
    }

    /// Requires `value >= 0.0`.
    ///
    /// Zero is accepted, unlike [`IntField::positive`](crate::fields::IntField::positive).
    pub fn positive(self) -> Self {
        self.gte(0.0)
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

    /// Returns the lower bound, if set.
    #[must_use]
    pub fn min(&self) -> Option<FloatMin> {
        self.min
    }

    /// Returns the upper bound, if set.
    #[must_use]
    pub fn max(&self) -> Option<FloatMax> {
        self.max
    }

    /// Validates `value`; `None` means the value was not supplied.
    #[must_use]
    pub fn validate(&self, value: impl Into<Option<f64>>) -> ValidationError {
        let mut errors = ValidationError::new();
        let field = self.name.as_ref();

        let Some(value) = value.into() else {
            if self.required {
                push(&mut errors, required().check(field, ""));
            }
            return errors;
        };

        if let Some(min) = &self.min {
            push(&mut errors, min.check(field, &value));
        }
        if let Some(max) = &self.max {
            push(&mut errors, max.check(field, &value));
        }

        errors
    }
}

impl FieldSpec for FloatField {
    type Value = Option<f64>;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn validate_value(&self, value: &Option<f64>) -> ValidationError {
        self.validate(*value)
    }
}
