//! Character class validators
//!
//! All three classes are ASCII-only. Any character outside the listed
//! ranges, including every non-ASCII character, fails the check. The empty
//! string passes.

// ============================================================================
// ALPHA
// ============================================================================

crate::constraint! {
    /// Validates that a string contains only ASCII letters (`A-Z`, `a-z`).
    pub Alpha for str;
    code "alpha";
    rule(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
    message(input) { "must contain only letters" }
    fn alpha();
}

// ============================================================================
// ALPHANUMERIC
// ============================================================================

crate::constraint! {
    /// Validates that a string contains only ASCII letters and digits.
    pub Alphanumeric for str;
    code "alphanumeric";
    rule(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
    message(input) { "must contain only letters and numbers" }
    fn alphanumeric();
}

// ============================================================================
// NUMERIC
// ============================================================================

crate::constraint! {
    /// Validates that a string contains only ASCII digits (`0-9`).
    ///
    /// Signs, decimal points and whitespace are rejected.
    pub Numeric for str;
    code "numeric";
    rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
    message(input) { "must contain only digits" }
    fn numeric();
}

// ============================================================================
// TESTS
// ============================================================================
