//! Basic usage example for formcheck-validator

use formcheck_validator::prelude::*;

fn main() {
    // Single field, no schema
    let username = StringField::new("username")
        .required()
        .min_length(3)
        .alphanumeric();

    for value in ["alice", "jo-", ""] {
        let errors = username.validate(value);
        if errors.is_empty() {
            println!("✓ {value:?} is valid");
        } else {
            println!("✗ {value:?}: {}", errors.first_error());
        }
    }

    // Ad-hoc checks
    if let Some(error) = check_email("email", "not-an-email") {
        println!("✗ {error}");
    }

    // Fail-fast
    let parsed = assert_int_gte("age", 15, 18);
    println!("assert_int_gte: {parsed:?}");
}
