//! Numeric bound validators
//!
//! Integer bounds are always inclusive. Exclusive integer thresholds are
//! translated by one before they reach these types (`gt(v)` becomes
//! `IntMin { min: v + 1 }`), so only inclusive comparisons happen here.
//! Bounds are stored as `i128` so the translation never overflows:
//! `gt(i64::MAX)` becomes a minimum no `i64` can reach.
//!
//! Float bounds keep the caller's threshold as given and carry an
//! `exclusive` flag instead.

// ============================================================================
// INTEGER BOUNDS
// ============================================================================

crate::constraint! {
    /// Validates that an integer is at least `min` (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IntMin { min: i128 } for i64;
    code "min";
    rule(self, input) { i128::from(*input) >= self.min }
    message(self, input) { format!("must be greater than or equal to {}", self.min) }
    new(min: i64) { Self { min: i128::from(min) } }
    fn int_min(min: i64);
}

crate::constraint! {
    /// Validates that an integer is at most `max` (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IntMax { max: i128 } for i64;
    code "max";
    rule(self, input) { i128::from(*input) <= self.max }
    message(self, input) { format!("must be less than or equal to {}", self.max) }
    new(max: i64) { Self { max: i128::from(max) } }
    fn int_max(max: i64);
}

// ============================================================================
// FLOAT BOUNDS
// ============================================================================

crate::constraint! {
    /// Validates that a float is above a lower bound.
    ///
    /// NaN never satisfies a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Constraint;
    /// use formcheck_validator::validators::{FloatMin, float_min};
    ///
    /// assert!(float_min(0.0).check("ratio", &0.0).is_none());
    /// assert!(FloatMin::exclusive(0.0).check("ratio", &0.0).is_some());
    /// ```
    #[derive(Copy, PartialEq)]
    pub FloatMin { min: f64, exclusive: bool } for f64;
    code "min";
    rule(self, input) {
        if self.exclusive { *input > self.min } else { *input >= self.min }
    }
    message(self, input) {
        if self.exclusive {
            format!("must be greater than {}", self.min)
        } else {
            format!("must be greater than or equal to {}", self.min)
        }
    }
    new(min: f64) { Self { min, exclusive: false } }
    fn float_min(min: f64);
}

impl FloatMin {
    /// Creates a strict lower bound (`input > min`).
    #[must_use]
    pub fn exclusive(min: f64) -> Self {
        Self {
            min,
            exclusive: true,
        }
    }
}

crate::constraint! {
    /// Validates that a float is below an upper bound.
    ///
    /// NaN never satisfies a bound.
    #[derive(Copy, PartialEq)]
    pub FloatMax { max: f64, exclusive: bool } for f64;
    code "max";
    rule(self, input) {
        if self.exclusive { *input < self.max } else { *input <= self.max }
    }
    message(self, input) {
        if self.exclusive {
            format!("must be less than {}", self.max)
        } else {
            format!("must be less than or equal to {}", self.max)
        }
    }
    new(max: f64) { Self { max, exclusive: false } }
    fn float_max(max: f64);
}

impl FloatMax {
    /// Creates a strict upper bound (`input < max`).
    #[must_use]
    pub fn exclusive(max: f64) -> Self {
        Self {
            max,
            exclusive: true,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
