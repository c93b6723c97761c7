//! Allowed-value set validator

crate::constraint! {
    /// Validates that a string equals one of the allowed values.
    ///
    /// Comparison is exact and case-sensitive. The failure message lists
    /// the allowed values in the order they were supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Constraint;
    /// use formcheck_validator::validators::one_of;
    ///
    /// let role = one_of(["admin", "user"]);
    /// assert!(role.check("role", "user").is_none());
    ///
    /// let error = role.check("role", "Admin").unwrap();
    /// assert_eq!(error.message(), "must be one of: admin, user");
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf { allowed: Vec<String> } for str;
    code "one_of";
    rule(self, input) { self.allowed.iter().any(|candidate| candidate == input) }
    message(self, input) { format!("must be one of: {}", self.allowed.join(", ")) }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}

impl OneOf {
    /// Returns the allowed values in their original order.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Constraint;

    #[test]
    fn test_one_of_exact_match() {
        let validator = one_of(["red", "green", "blue"]);
        assert!(validator.check("color", "green").is_none());
        assert!(validator.check("color", "Green").is_some());
        assert!(validator.check("color", " green").is_some());
    }

    #[test]
    fn test_one_of_message_keeps_order() {
        let validator = one_of(vec!["b".to_string(), "a".to_string(), "c".to_string()]);
        let error = validator.check("letter", "z").unwrap();
        assert_eq!(error.to_string(), "letter: must be one of: b, a, c (got: z)");
    }

    #[test]
    fn test_empty_allowed_list_rejects_everything() {
        let validator = one_of(Vec::<String>::new());
        assert!(validator.check("x", "").is_some());
        assert_eq!(
            validator.check("x", "a").unwrap().message(),
            "must be one of: "
        );
    }
}
