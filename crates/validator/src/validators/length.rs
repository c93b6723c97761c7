//! Presence and string length constraints
//!
//! Length is measured in Unicode scalar values (chars) by default, which is
//! identical to the byte length for ASCII input. Use the `bytes()`
//! constructors when the raw UTF-8 length is what matters.

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::constraint! {
    /// Validates that a string is present (non-empty).
    ///
    /// Whitespace counts as content: `" "` passes.
    pub Required for str;
    code "required";
    rule(input) { !input.is_empty() }
    message(input) { "is required" }
    fn required();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::constraint! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    code "min_length";
    rule(self, input) { self.mode.measure(input) >= self.min }
    message(self, input) { format!("must be at least {} characters long", self.min) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length constraint that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::constraint! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    code "max_length";
    rule(self, input) { self.mode.measure(input) <= self.max }
    message(self, input) { format!("must be at most {} characters long", self.max) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length constraint that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;

    #[test]
    fn test_required() {
        assert!(required().check("name", "bob").is_none());
        assert!(required().check("name", " ").is_none());

        let error = required().check("name", "").unwrap();
        assert_eq!(error.to_string(), "name: is required");
        assert_eq!(error.code(), "required");
    }

    #[test]
    fn test_min_length_boundaries() {
        let constraint = min_length(3);
        assert!(constraint.check("f", "abc").is_none());
        assert!(constraint.check("f", "abcd").is_none());

        let error = constraint.check("f", "ab").unwrap();
        assert_eq!(error.message(), "must be at least 3 characters long");
        assert_eq!(error.value(), "ab");
    }

    #[test]
    fn test_max_length_boundaries() {
        let constraint = max_length(5);
        assert!(constraint.check("f", "hello").is_none());
        assert!(constraint.check("f", "").is_none());

        let error = constraint.check("f", "hello!").unwrap();
        assert_eq!(error.message(), "must be at most 5 characters long");
    }

    #[test]
    fn test_min_length_zero_accepts_empty() {
        assert!(min_length(0).check("f", "").is_none());
    }

    #[test]
    fn test_unicode_handling() {
        // "héllo" is 5 chars but 6 bytes
        assert!(MinLength::new(5).check("f", "h\u{e9}llo").is_none());
        assert!(MaxLength::new(5).check("f", "h\u{e9}llo").is_none());
        assert!(MaxLength::bytes(5).check("f", "h\u{e9}llo").is_some());
        assert!(MinLength::bytes(6).check("f", "h\u{e9}llo").is_none());
    }

    #[test]
    fn test_length_mode_measure() {
        assert_eq!(LengthMode::Chars.measure("\u{1f44b}"), 1);
        assert_eq!(LengthMode::Bytes.measure("\u{1f44b}"), 4);
        assert_eq!(LengthMode::default(), LengthMode::Chars);
    }
}
