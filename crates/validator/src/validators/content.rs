//! String format validators
//!
//! Both checks are syntactic only: `Email` does not implement RFC 5322
//! and `Url` only looks at the scheme prefix.

/// Returns true if `input` has the minimal shape of an email address.
///
/// The value must contain both `@` and `.`, and its first `@` must be
/// neither the first nor the last character.
#[inline]
fn looks_like_email(input: &str) -> bool {
    match input.find('@') {
        Some(at) => at != 0 && at + 1 != input.len() && input.contains('.'),
        None => false,
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::constraint! {
    /// Validates email shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Constraint;
    /// use formcheck_validator::validators::email;
    ///
    /// assert!(email().check("email", "user@example.com").is_none());
    /// assert!(email().check("email", "not-an-email").is_some());
    /// // Accepted: the check is syntactic only.
    /// assert!(email().check("email", "a@.").is_none());
    /// ```
    pub Email for str;
    code "email";
    rule(input) { looks_like_email(input) }
    message(input) { "must be a valid email address" }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::constraint! {
    /// Validates that a string starts with `http://` or `https://`.
    pub Url for str;
    code "url";
    rule(input) { input.starts_with("http://") || input.starts_with("https://") }
    message(input) { "must be a valid URL" }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;

    #[test]
    fn test_email() {
        let validator = email();
        assert!(validator.check("email", "user@example.com").is_none());
        assert!(validator.check("email", "invalid").is_some());
        assert!(validator.check("email", "@example.com").is_some());
        assert!(validator.check("email", "user.name@").is_some());
        assert!(validator.check("email", "user@example").is_some());
    }

    #[test]
    fn test_email_message() {
        let error = email().check("email", "not-an-email").unwrap();
        assert_eq!(
            error.to_string(),
            "email: must be a valid email address (got: not-an-email)"
        );
    }

    #[test]
    fn test_email_is_only_syntactic() {
        // Dot before the at-sign still satisfies the shape check.
        assert!(email().check("email", "first.last@localhost").is_none());
        assert!(email().check("email", "a.b@c").is_none());
        // Only the first at-sign is positioned.
        assert!(email().check("email", "a@b.c@").is_none());
    }

    #[test]
    fn test_url() {
        let validator = url();
        assert!(validator.check("site", "http://example.com").is_none());
        assert!(validator.check("site", "https://example.com/path").is_none());
        assert!(validator.check("site", "https://").is_none());
        assert!(validator.check("site", "invalid").is_some());
        assert!(validator.check("site", "ftp://example.com").is_some());
        assert!(validator.check("site", "HTTP://example.com").is_some());
    }
}
