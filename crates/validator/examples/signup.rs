//! Rejects sign-ups whose username or email is already taken.
//!
//! Run with `RUST_LOG=debug` to see the lookups.

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use warden_validator::prelude::*;

static USERNAME: EntityNotExist = entity_not_exist!(entity: "User", property: "username");
static EMAIL: EntityNotExist = entity_not_exist!(
    entity: "User",
    property: "email",
    message: "%value% is already registered",
);

fn main() -> Result<(), ConstraintError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lookup = Arc::new(InMemoryLookup::new());
    lookup.insert("User", json!({"id": 1, "username": "ada", "email": "ada@example.com"}));

    let validator = EntityNotExistValidator::new(lookup);

    let form = [
        ("username", json!("grace"), &USERNAME),
        ("email", json!("ada@example.com"), &EMAIL),
        ("email", json!(null), &EMAIL),
    ];

    for (field, value, rule) in form {
        match validator.validate(&value, rule)? {
            Some(violation) => println!("✗ {}", violation.with_field(field)),
            None => println!("✓ {field} = {value}"),
        }
    }

    Ok(())
}
