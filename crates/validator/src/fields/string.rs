//! String field spec

use std::borrow::Cow;

use crate::fields::{FieldSpec, push};
use crate::foundation::{Constraint, ValidationError};
use crate::validators::{
    LengthMode, MaxLength, MinLength, OneOf, alpha, alphanumeric, email, numeric, required, url,
};

/// Constraints on a string field.
///
/// Checks run in this order once the value is non-empty: minimum length,
/// maximum length, email, URL, alpha, alphanumeric, numeric, allowed
/// values. None of them stops the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringField {
    name: Cow<'static, str>,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    length_mode: LengthMode,
    email: bool,
    url: bool,
    alpha: bool,
    alphanumeric: bool,
    numeric: bool,
    one_of: Option<OneOf>,
}

impl StringField {
    /// Creates an unconstrained string field.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            required: false,
            min_length: None,
            max_length: None,
            length_mode: LengthMode::Chars,
            email: false,
            url: false,
            alpha: false,
            alphanumeric: false,
            numeric: false,
            one_of: None,
        }
    }

    /// Rejects the empty string.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires at least `min` characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Allows at most `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Shorthand for `min_length(min).max_length(max)`.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Measures length in UTF-8 bytes instead of chars.
    pub fn count_bytes(mut self) -> Self {
        self.length_mode = LengthMode::Bytes;
        self
    }

    /// Requires the minimal shape of an email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Requires an `http://` or `https://` prefix.
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// Allows ASCII letters only.
    pub fn alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    /// Allows ASCII letters and digits only.
    pub fn alphanumeric(mut self) -> Self {
        self.alphanumeric = true;
        self
    }

    /// Allows ASCII digits only.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Restricts the value to one of `allowed` (exact match).
    pub fn one_of(mut self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.one_of = Some(OneOf::new(allowed));
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the empty string is rejected.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the minimum length, if set.
    #[must_use]
    pub fn min_len(&self) -> Option<usize> {
        self.min_length
    }

    /// Returns the maximum length, if set.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns how length is measured.
    #[must_use]
    pub fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Returns the allowed values, if restricted.
    #[must_use]
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.one_of.as_ref().map(OneOf::allowed)
    }

    /// Validates `value` against every configured constraint.
    #[must_use]
    pub fn validate(&self, value: &str) -> ValidationError {
        let mut errors = ValidationError::new();
        let field = self.name.as_ref();

        if value.is_empty() {
            if self.required {
                push(&mut errors, required().check(field, value));
            }
            return errors;
        }

        if let Some(min) = self.min_length {
            let constraint = MinLength {
                min,
                mode: self.length_mode,
            };
            push(&mut errors, constraint.check(field, value));
        }
        if let Some(max) = self.max_length {
            let constraint = MaxLength {
                max,
                mode: self.length_mode,
            };
            push(&mut errors, constraint.check(field, value));
        }
        if self.email {
            push(&mut errors, email().check(field, value));
        }
        if self.url {
            push(&mut errors, url().check(field, value));
        }
        if self.alpha {
            push(&mut errors, alpha().check(field, value));
        }
        if self.alphanumeric {
            push(&mut errors, alphanumeric().check(field, value));
        }
        if self.numeric {
            push(&mut errors, numeric().check(field, value));
        }
        if let Some(one_of) = &self.one_of {
            push(&mut errors, one_of.check(field, value));
        }

        errors
    }
}

impl FieldSpec for StringField {
    type Value = str;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn validate_value(&self, value: &str) -> ValidationError {
        self.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(errors: &ValidationError) -> Vec<&str> {
        errors.iter().map(|e| e.code()).collect()
    }

    #[test]
    fn test_unconstrained_field_accepts_anything() {
        let field = StringField::new("note");
        assert!(field.validate("").is_empty());
        assert!(field.validate("anything at all \u{1f600}").is_empty());
    }

    #[test]
    fn test_required_short_circuits() {
        let field = StringField::new("email")
            .required()
            .min_length(5)
            .email()
            .one_of(["a@b.c"]);

        let errors = field.validate("");
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.first_error(), "email: is required");
    }

    #[test]
    fn test_optional_empty_skips_format_checks() {
        let field = StringField::new("website").url().min_length(10);
        assert!(field.validate("").is_empty());
    }

    #[test]
    fn test_username_scenario() {
        let field = StringField::new("username")
            .min_length(3)
            .max_length(20)
            .alphanumeric();

        let errors = field.validate("jo-");
        assert_eq!(codes(&errors), vec!["alphanumeric"]);
        assert!(field.validate("john42").is_empty());
    }

    #[test]
    fn test_all_violations_in_fixed_order() {
        let field = StringField::new("code")
            .max_length(3)
            .numeric()
            .alpha()
            .url()
            .email()
            .one_of(["123"]);

        let errors = field.validate("a-b-c");
        assert_eq!(
            codes(&errors),
            vec!["max_length", "email", "url", "alpha", "numeric", "one_of"]
        );
    }

    #[test]
    fn test_too_short_and_not_alphanumeric() {
        let field = StringField::new("username").min_length(5).alphanumeric();
        let errors = field.validate("a!");
        assert_eq!(codes(&errors), vec!["min_length", "alphanumeric"]);
    }

    #[test]
    fn test_last_write_wins() {
        let field = StringField::new("name").min_length(10).min_length(2);
        assert_eq!(field.min_len(), Some(2));
        assert!(field.validate("abc").is_empty());
    }

    #[test]
    fn test_length_shorthand_and_byte_mode() {
        let field = StringField::new("tag").length(2, 4);
        assert_eq!((field.min_len(), field.max_len()), (Some(2), Some(4)));
        assert!(field.validate("\u{e9}\u{e9}\u{e9}").is_empty());

        let bytes = field.count_bytes();
        assert_eq!(bytes.length_mode(), LengthMode::Bytes);
        assert_eq!(bytes.validate("\u{e9}\u{e9}\u{e9}").count(), 1);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let field = StringField::new("email").required().email();
        assert_eq!(field.validate("bad"), field.validate("bad"));
    }

    #[test]
    fn test_getters() {
        let field = StringField::new("role").required().one_of(["admin", "user"]);
        assert_eq!(field.name(), "role");
        assert!(field.is_required());
        assert_eq!(
            field.allowed_values(),
            Some(&["admin".to_string(), "user".to_string()][..])
        );
    }
}
