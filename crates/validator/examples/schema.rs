//! Schema validation with tracing output.
//!
//! Run with `RUST_LOG=formcheck_validator=trace cargo run --example schema`
//! to see registration and validation events.

use formcheck_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .init();

    let mut model = ModelValidator::new();
    model
        .string("username", |f| f.required().length(3, 20).alphanumeric())
        .string("email", |f| f.required().email())
        .string("role", |f| f.one_of(["admin", "user"]))
        .int("age", |f| f.between(18, 120))
        .float("balance", FloatField::positive);

    model.check_string("username", "jo-");
    model.check_string("email", "user@example.com");
    model.check_string("role", "root");
    model.check_int("age", 15);
    model.check_float("balance", -3.5);
    model.check_string("nickname", "anything goes");

    println!("{}", model.errors());
    println!("{}", serde_json::to_string_pretty(model.errors())?);

    model.reset();
    model.check_string("username", "alice");
    println!("after reset: valid = {}", model.is_valid());

    model.schema().ensure_valid()?;
    Ok(())
}
