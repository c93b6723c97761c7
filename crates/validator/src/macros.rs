//! Macros for declaring constraints with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck_validator::constraint;
//!
//! // Unit constraint (no fields)
//! constraint! {
//!     pub NotBlank for str;
//!     code "not_blank";
//!     rule(input) { !input.trim().is_empty() }
//!     message(input) { "must not be blank" }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! constraint! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     code "min_length";
//!     rule(self, input) { input.len() >= self.min }
//!     message(self, input) { format!("must be at least {} characters long", self.min) }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a complete constraint: struct definition, [`Constraint`]
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. On failure the generated `check` returns a
/// [`FieldError`] carrying the field name, the declared `code`, the
/// `message` block's result, and the input rendered through `Display` as
/// the echoed value.
///
/// [`Constraint`]: crate::foundation::Constraint
/// [`FieldError`]: crate::foundation::FieldError
#[macro_export]
macro_rules! constraint {
    // ── Shared `Constraint` impl for struct constraints ──────────────────
    (@impl $name:ident, $input:ty, $code:literal, $self_:ident, $inp:ident, $rule:block, $minp:ident, $msg:block) => {
        impl $crate::foundation::Constraint for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(
                &$self_,
                field: &str,
                $inp: &Self::Input,
            ) -> ::std::option::Option<$crate::foundation::FieldError> {
                if $rule {
                    None
                } else {
                    let $minp = $inp;
                    Some(
                        $crate::foundation::FieldError::new(field.to_owned(), $msg)
                            .with_code($code)
                            .with_value($inp.to_string()),
                    )
                }
            }
        }
    };

    // ── Unit constraint (no fields) + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        code $code:literal;
        rule($inp:ident) $rule:block
        message($minp:ident) $msg:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Constraint for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(
                &self,
                field: &str,
                $inp: &Self::Input,
            ) -> ::std::option::Option<$crate::foundation::FieldError> {
                if $rule {
                    None
                } else {
                    let $minp = $inp;
                    Some(
                        $crate::foundation::FieldError::new(field.to_owned(), $msg)
                            .with_code($code)
                            .with_value($inp.to_string()),
                    )
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::constraint!(@impl $name, $input, $code, $self_, $inp, $rule, $minp, $msg);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        code $code:literal;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::constraint!(@impl $name, $input, $code, $self_, $inp, $rule, $minp, $msg);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::Constraint;

    crate::constraint! {
        /// Test-only constraint.
        NotBlank for str;
        code "not_blank";
        rule(input) { !input.trim().is_empty() }
        message(input) { "must not be blank" }
        fn not_blank();
    }

    crate::constraint! {
        #[derive(Copy, PartialEq, Eq)]
        DivisibleBy { divisor: i64 } for i64;
        code "divisible_by";
        rule(self, input) { input % self.divisor == 0 }
        message(self, input) { format!("must be divisible by {}", self.divisor) }
        fn divisible_by(divisor: i64);
    }

    #[test]
    fn test_unit_constraint() {
        assert!(not_blank().check("name", "bob").is_none());
        let error = not_blank().check("name", "   ").unwrap();
        assert_eq!(error.code(), "not_blank");
        assert_eq!(error.value(), "   ");
    }

    #[test]
    fn test_struct_constraint() {
        assert!(divisible_by(3).check("n", &9).is_none());
        let error = divisible_by(3).check("n", &10).unwrap();
        assert_eq!(error.to_string(), "n: must be divisible by 3 (got: 10)");
    }
}
